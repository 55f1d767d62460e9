//! Error types for order operations

use thiserror::Error;

/// Validation errors for incoming order requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderValidationError {
	#[error("Missing required field: {field}")]
	MissingField { field: &'static str },

	#[error("Invalid amount: {field} - {reason}")]
	InvalidAmount { field: &'static str, reason: String },
}

/// Errors raised while pricing a quote
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
	#[error("Invalid price '{value}': {reason}")]
	InvalidPrice { value: String, reason: String },

	#[error("Pricing overflow: {amount} x {price} exceeds the supported amount range")]
	Overflow { amount: String, price: String },
}
