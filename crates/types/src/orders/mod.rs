//! Order domain model: a priced, unsigned maker order

pub mod errors;
pub mod request;
pub mod response;

pub use errors::{OrderValidationError, PricingError};
pub use request::{OrderRequest, SwapRequest};
pub use response::OrderResponse;

use crate::models::TokenAmount;

/// Result type for order validation operations
pub type OrderValidationResult<T> = Result<T, OrderValidationError>;

/// A quote the maker is willing to fill, ready for signing downstream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
	pub maker_address: String,
	pub taker_address: String,
	pub maker_token: String,
	pub taker_token: String,
	pub maker_amount: TokenAmount,
	pub taker_amount: TokenAmount,
	/// Unix timestamp in seconds after which the order must not be filled
	pub expiration: i64,
	pub nonce: u32,
}
