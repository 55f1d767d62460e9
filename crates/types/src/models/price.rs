//! Exact decimal price used to derive the counter amount of a quote

use crate::models::TokenAmount;
use crate::orders::PricingError;
use std::fmt;
use std::str::FromStr;

/// Largest number of fractional digits a price may carry (10^38 fits in u128)
pub const MAX_PRICE_SCALE: u32 = 38;

/// Taker units paid per maker unit, stored as `numerator / 10^scale`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price {
	numerator: u128,
	scale: u32,
}

impl Price {
	/// Build a price from its scaled numerator, e.g. `Price::new(5, 1)` is 0.5.
	///
	/// Panics when `scale` exceeds [`MAX_PRICE_SCALE`] or the price carries
	/// more precision than [`Price::apply`] can compute with.
	pub const fn new(numerator: u128, scale: u32) -> Self {
		assert!(scale <= MAX_PRICE_SCALE, "price scale out of range");
		assert!(
			remainder_fits(numerator, scale),
			"price has too many significant digits"
		);
		Self { numerator, scale }
	}

	fn denominator(&self) -> u128 {
		10u128.pow(self.scale)
	}

	/// `floor(amount * price)` in integer arithmetic.
	///
	/// Splits `amount = q * d + r` so that `amount * n / d = q * n + r * n / d`
	/// without forming the full product.
	pub fn apply(&self, amount: TokenAmount) -> Result<TokenAmount, PricingError> {
		let overflow = || PricingError::Overflow {
			amount: amount.to_string(),
			price: self.to_string(),
		};
		let denominator = self.denominator();
		let whole = (amount.value() / denominator)
			.checked_mul(self.numerator)
			.ok_or_else(overflow)?;
		// r < 10^scale, and n * (10^scale - 1) fits by construction
		let fraction = (amount.value() % denominator) * self.numerator / denominator;

		whole
			.checked_add(fraction)
			.map(TokenAmount::new)
			.ok_or_else(overflow)
	}
}

/// Whether `numerator * (10^scale - 1)` fits in u128, which bounds the
/// remainder product in [`Price::apply`]
const fn remainder_fits(numerator: u128, scale: u32) -> bool {
	numerator.checked_mul(10u128.pow(scale) - 1).is_some()
}

impl Default for Price {
	fn default() -> Self {
		Self::new(5, 1)
	}
}

impl FromStr for Price {
	type Err = PricingError;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let invalid = |reason: &str| PricingError::InvalidPrice {
			value: raw.to_string(),
			reason: reason.to_string(),
		};

		let (whole, fraction) = raw.split_once('.').unwrap_or((raw, ""));
		if whole.is_empty() && fraction.is_empty() {
			return Err(invalid("price is empty"));
		}
		if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
			return Err(invalid("price must be a non-negative decimal number"));
		}

		let fraction = fraction.trim_end_matches('0');
		let scale = fraction.len() as u32;
		if scale > MAX_PRICE_SCALE {
			return Err(invalid("price has too many fractional digits"));
		}

		let digits = format!("{}{}", whole, fraction);
		let numerator = if digits.is_empty() {
			0
		} else {
			digits
				.parse::<u128>()
				.map_err(|_| invalid("price is too large"))?
		};
		if !remainder_fits(numerator, scale) {
			return Err(invalid("price has too many significant digits"));
		}

		Ok(Self { numerator, scale })
	}
}

impl fmt::Display for Price {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.scale == 0 {
			return write!(f, "{}", self.numerator);
		}
		let denominator = self.denominator();
		write!(
			f,
			"{}.{:0width$}",
			self.numerator / denominator,
			self.numerator % denominator,
			width = self.scale as usize
		)
	}
}

impl serde::Serialize for Price {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> serde::Deserialize<'de> for Price {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		value.parse().map_err(serde::de::Error::custom)
	}
}
