//! RFQ Types
//!
//! Wire and domain models for the RFQ maker order server: swap requests,
//! priced orders, token amounts and the error taxonomy shared by the other
//! crates.

pub mod models;
pub mod orders;

// Re-export serde_json for convenience
pub use serde_json;

pub use models::{AmountParseError, Price, TokenAmount};

pub use orders::{
	Order, OrderRequest, OrderResponse, OrderValidationError, OrderValidationResult, PricingError,
	SwapRequest,
};
