//! API request fixtures for e2e and integration tests

use rfq_maker::serde_json::{json, Value};

/// API test data fixtures
#[allow(dead_code)]
pub struct ApiFixtures;

#[allow(dead_code)]
impl ApiFixtures {
	pub const MAKER_ADDRESS: &'static str = "0xA";
	pub const TAKER_ADDRESS: &'static str = "0xB";
	pub const MAKER_TOKEN: &'static str = "0xT1";
	pub const TAKER_TOKEN: &'static str = "0xT2";

	/// Request with every field but the amounts
	pub fn base_order_request() -> Value {
		json!({
			"makerAddress": Self::MAKER_ADDRESS,
			"takerAddress": Self::TAKER_ADDRESS,
			"makerToken": Self::MAKER_TOKEN,
			"takerToken": Self::TAKER_TOKEN
		})
	}

	/// Request for a given maker amount (string or number)
	pub fn order_request_with_maker_amount(amount: Value) -> Value {
		let mut request = Self::base_order_request();
		request["makerAmount"] = amount;
		request
	}

	/// The canonical `makerAmount: "100"` request
	pub fn valid_order_request() -> Value {
		Self::order_request_with_maker_amount(json!("100"))
	}

	/// Request with one required field removed
	pub fn order_request_without(field: &str) -> Value {
		let mut request = Self::valid_order_request();
		if let Some(object) = request.as_object_mut() {
			object.remove(field);
		}
		request
	}
}
