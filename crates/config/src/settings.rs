//! Configuration settings structures

use rfq_types::Price;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use thiserror::Error;

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub pricing: PricingSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Quote pricing configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PricingSettings {
	/// Taker units paid per maker unit, as a decimal string ("0.5")
	pub price: Price,
	/// Seconds a quote stays valid after it is issued
	pub expiration_secs: u64,
	/// Inclusive upper bound for generated nonces
	pub max_nonce: u32,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Problems found by [`Settings::validate`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
	#[error("server.host must not be empty")]
	EmptyHost,

	#[error("invalid bind address '{address}'")]
	InvalidBindAddress { address: String },

	#[error("pricing.expiration_secs must be greater than zero")]
	ZeroExpiration,

	#[error("pricing.expiration_secs {0} is too large")]
	ExpirationTooLarge(u64),
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 5004,
		}
	}
}

impl Default for PricingSettings {
	fn default() -> Self {
		Self {
			price: Price::default(),
			expiration_secs: 300,
			max_nonce: 99_999,
		}
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Parse the bind address into a socket address
	pub fn socket_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
		let address = self.bind_address();
		address
			.parse()
			.map_err(|_| ConfigValidationError::InvalidBindAddress { address })
	}

	/// Check the settings for values the server cannot run with
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		if self.server.host.trim().is_empty() {
			return Err(ConfigValidationError::EmptyHost);
		}
		self.socket_addr()?;

		let expiration = self.pricing.expiration_secs;
		if expiration == 0 {
			return Err(ConfigValidationError::ZeroExpiration);
		}
		if i64::try_from(expiration).is_err() {
			return Err(ConfigValidationError::ExpirationTooLarge(expiration));
		}

		Ok(())
	}
}
