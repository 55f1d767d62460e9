//! Token amount model for integer quantities carried as decimal strings

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Reasons a raw amount cannot be turned into a [`TokenAmount`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
	#[error("amount must not be negative")]
	Negative,

	#[error("amount must be an integer")]
	NotAnInteger,

	#[error("amount must contain only decimal digits")]
	InvalidDigits,

	#[error("amount exceeds the maximum supported value")]
	TooLarge,

	#[error("numeric amounts must fit in 64 bits, send larger amounts as strings")]
	NumberOutOfRange,

	#[error("amount must be a string or a number, got {0}")]
	UnsupportedType(&'static str),
}

/// Non-negative integer token quantity
///
/// Amounts travel on the wire as decimal strings so that values beyond the
/// range of a JSON double survive intact. Arithmetic is done on the `u128`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenAmount(u128);

impl TokenAmount {
	pub const ZERO: Self = Self(0);

	pub const fn new(value: u128) -> Self {
		Self(value)
	}

	pub const fn value(&self) -> u128 {
		self.0
	}

	pub const fn is_zero(&self) -> bool {
		self.0 == 0
	}

	/// Parse a decimal string. Leading zeros are accepted.
	pub fn parse(raw: &str) -> Result<Self, AmountParseError> {
		if let Some(rest) = raw.strip_prefix('-') {
			if !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
				return Err(AmountParseError::Negative);
			}
			return Err(AmountParseError::InvalidDigits);
		}

		if let Some((whole, fraction)) = raw.split_once('.') {
			let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
			if !whole.is_empty() && digits(whole) && digits(fraction) {
				return Err(AmountParseError::NotAnInteger);
			}
			return Err(AmountParseError::InvalidDigits);
		}

		if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
			return Err(AmountParseError::InvalidDigits);
		}

		// Only overflow can fail once every char is a digit
		raw.parse::<u128>()
			.map(Self)
			.map_err(|_| AmountParseError::TooLarge)
	}

	/// Read an optional amount out of a JSON value.
	///
	/// `null` and the empty string mean "not supplied" and yield `None`.
	pub fn from_json(value: &Value) -> Result<Option<Self>, AmountParseError> {
		match value {
			Value::Null => Ok(None),
			Value::String(s) if s.is_empty() => Ok(None),
			Value::String(s) => Self::parse(s).map(Some),
			Value::Number(n) => {
				if let Some(v) = n.as_u64() {
					Ok(Some(Self(v as u128)))
				} else if n.is_i64() {
					Err(AmountParseError::Negative)
				} else {
					// Float-form numbers such as `100.0` or `1e2`
					match n.as_f64() {
						Some(f) if f < 0.0 => Err(AmountParseError::Negative),
						Some(f) if f.fract() != 0.0 => Err(AmountParseError::NotAnInteger),
						Some(f) if f <= u64::MAX as f64 => Ok(Some(Self(f as u128))),
						_ => Err(AmountParseError::NumberOutOfRange),
					}
				}
			},
			Value::Bool(_) => Err(AmountParseError::UnsupportedType("boolean")),
			Value::Array(_) => Err(AmountParseError::UnsupportedType("array")),
			Value::Object(_) => Err(AmountParseError::UnsupportedType("object")),
		}
	}
}

impl fmt::Display for TokenAmount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for TokenAmount {
	type Err = AmountParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl From<u128> for TokenAmount {
	fn from(value: u128) -> Self {
		Self(value)
	}
}

impl From<u64> for TokenAmount {
	fn from(value: u64) -> Self {
		Self(value as u128)
	}
}

impl serde::Serialize for TokenAmount {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.collect_str(self)
	}
}

impl<'de> serde::Deserialize<'de> for TokenAmount {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		Self::parse(&value).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_parse_digits() {
		assert_eq!(TokenAmount::parse("100").unwrap().value(), 100);
		assert_eq!(TokenAmount::parse("0").unwrap(), TokenAmount::ZERO);
		assert_eq!(TokenAmount::parse("007").unwrap().value(), 7);
	}

	#[test]
	fn test_parse_beyond_u64() {
		let amount = TokenAmount::parse("123456789012345678901234567890").unwrap();
		assert_eq!(amount.to_string(), "123456789012345678901234567890");
	}

	#[test]
	fn test_parse_rejections() {
		assert_eq!(TokenAmount::parse("-5"), Err(AmountParseError::Negative));
		assert_eq!(TokenAmount::parse("1.5"), Err(AmountParseError::NotAnInteger));
		assert_eq!(TokenAmount::parse("12abc"), Err(AmountParseError::InvalidDigits));
		assert_eq!(TokenAmount::parse(" 12"), Err(AmountParseError::InvalidDigits));
		assert_eq!(TokenAmount::parse("1e18"), Err(AmountParseError::InvalidDigits));
		assert_eq!(TokenAmount::parse("+3"), Err(AmountParseError::InvalidDigits));
		assert_eq!(TokenAmount::parse("-"), Err(AmountParseError::InvalidDigits));
		assert_eq!(TokenAmount::parse(""), Err(AmountParseError::InvalidDigits));

		let too_large = format!("{}0", u128::MAX);
		assert_eq!(TokenAmount::parse(&too_large), Err(AmountParseError::TooLarge));
	}

	#[test]
	fn test_from_json_absent_forms() {
		assert_eq!(TokenAmount::from_json(&Value::Null).unwrap(), None);
		assert_eq!(TokenAmount::from_json(&json!("")).unwrap(), None);
	}

	#[test]
	fn test_from_json_string_and_number_agree() {
		let from_string = TokenAmount::from_json(&json!("250")).unwrap();
		let from_number = TokenAmount::from_json(&json!(250)).unwrap();
		assert_eq!(from_string, from_number);
		assert_eq!(from_number, Some(TokenAmount::new(250)));
	}

	#[test]
	fn test_from_json_integral_float_forms() {
		assert_eq!(
			TokenAmount::from_json(&json!(100.0)),
			Ok(Some(TokenAmount::new(100)))
		);
		let exponent: Value = serde_json::from_str("1e2").unwrap();
		assert_eq!(
			TokenAmount::from_json(&exponent),
			Ok(Some(TokenAmount::new(100)))
		);
		assert_eq!(
			TokenAmount::from_json(&json!(0.0)),
			Ok(Some(TokenAmount::ZERO))
		);
		assert_eq!(TokenAmount::from_json(&json!(-3.0)), Err(AmountParseError::Negative));
	}

	#[test]
	fn test_from_json_rejections() {
		assert_eq!(TokenAmount::from_json(&json!(-1)), Err(AmountParseError::Negative));
		assert_eq!(TokenAmount::from_json(&json!(2.5)), Err(AmountParseError::NotAnInteger));
		assert_eq!(
			TokenAmount::from_json(&json!(1e30)),
			Err(AmountParseError::NumberOutOfRange)
		);
		assert_eq!(
			TokenAmount::from_json(&json!(true)),
			Err(AmountParseError::UnsupportedType("boolean"))
		);
		assert!(TokenAmount::from_json(&json!(["1"])).is_err());
	}

	#[test]
	fn test_serializes_as_string() {
		let amount = TokenAmount::new(1_000_000_000_000_000_000);
		assert_eq!(
			serde_json::to_value(amount).unwrap(),
			json!("1000000000000000000")
		);

		let back: TokenAmount = serde_json::from_value(json!("42")).unwrap();
		assert_eq!(back.value(), 42);
		assert!(serde_json::from_value::<TokenAmount>(json!("4.2")).is_err());
	}
}
