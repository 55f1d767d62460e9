//! Shared value types used by requests, orders and pricing

pub mod price;
pub mod token_amount;

pub use price::Price;
pub use token_amount::{AmountParseError, TokenAmount};
