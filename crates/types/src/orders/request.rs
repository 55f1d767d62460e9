//! Order request models and validation

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::TokenAmount;
use crate::orders::{OrderValidationError, OrderValidationResult};

/// API request body for `POST /getOrder`
///
/// Fields stay loose here so that a missing key or a malformed amount can be
/// reported precisely by [`SwapRequest::try_from`] instead of failing the
/// whole body.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
	#[serde(default)]
	pub maker_address: Option<String>,

	#[serde(default)]
	pub taker_address: Option<String>,

	#[serde(default)]
	pub maker_token: Option<String>,

	#[serde(default)]
	pub taker_token: Option<String>,

	/// Amount the taker wants from the maker, decimal string or number
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub maker_amount: Option<Value>,

	/// Amount the taker offers, decimal string or number
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub taker_amount: Option<Value>,
}

/// Validated swap request, ready to be priced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapRequest {
	pub maker_address: String,
	pub taker_address: String,
	pub maker_token: String,
	pub taker_token: String,
	pub maker_amount: TokenAmount,
	pub taker_amount: TokenAmount,
}

fn required(field: &'static str, value: Option<String>) -> OrderValidationResult<String> {
	value.ok_or(OrderValidationError::MissingField { field })
}

fn amount(field: &'static str, value: Option<&Value>) -> OrderValidationResult<TokenAmount> {
	let Some(value) = value else {
		return Ok(TokenAmount::ZERO);
	};
	TokenAmount::from_json(value)
		.map(Option::unwrap_or_default)
		.map_err(|e| OrderValidationError::InvalidAmount {
			field,
			reason: e.to_string(),
		})
}

impl TryFrom<OrderRequest> for SwapRequest {
	type Error = OrderValidationError;

	fn try_from(request: OrderRequest) -> Result<Self, Self::Error> {
		Ok(Self {
			maker_address: required("makerAddress", request.maker_address)?,
			taker_address: required("takerAddress", request.taker_address)?,
			maker_token: required("makerToken", request.maker_token)?,
			taker_token: required("takerToken", request.taker_token)?,
			maker_amount: amount("makerAmount", request.maker_amount.as_ref())?,
			taker_amount: amount("takerAmount", request.taker_amount.as_ref())?,
		})
	}
}
