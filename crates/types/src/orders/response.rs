//! Order response models

use serde::{Deserialize, Serialize};

use crate::models::TokenAmount;
use crate::orders::Order;

/// API response body for `POST /getOrder`
///
/// Amounts and the expiration are decimal strings; the nonce is a plain number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
	pub maker_token: String,
	pub taker_token: String,
	pub maker_amount: TokenAmount,
	pub taker_amount: TokenAmount,
	pub expiration: String,
	pub nonce: u32,
}

impl From<Order> for OrderResponse {
	fn from(order: Order) -> Self {
		Self {
			maker_token: order.maker_token,
			taker_token: order.taker_token,
			maker_amount: order.maker_amount,
			taker_amount: order.taker_amount,
			expiration: order.expiration.to_string(),
			nonce: order.nonce,
		}
	}
}
