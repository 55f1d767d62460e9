//! RFQ Config
//!
//! Configuration management and startup utilities for the RFQ maker order server.

pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use loader::{load_config, load_config_from, ConfigLoadError};
pub use settings::{
	ConfigValidationError, LogFormat, LoggingSettings, PricingSettings, ServerSettings, Settings,
};
pub use startup_logger::{
	log_pricing_policy, log_service_info, log_service_shutdown, log_startup_complete,
};
