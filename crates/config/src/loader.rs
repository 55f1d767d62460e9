//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Default config file, resolved relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config/config";

/// Prefix for environment overrides, e.g. `RFQ_MAKER__SERVER__PORT=6000`
pub const ENV_PREFIX: &str = "RFQ_MAKER";

pub type ConfigLoadError = ConfigError;

/// Load configuration from the optional config file and the environment
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	load_config_from(DEFAULT_CONFIG_FILE, environment())
}

/// Environment source used by [`load_config`]
pub fn environment() -> Environment {
	Environment::with_prefix(ENV_PREFIX).separator("__")
}

/// Load configuration from a given file (extension optional) layered under
/// the given environment source. Missing files are skipped.
pub fn load_config_from(file: &str, env: Environment) -> Result<Settings, ConfigLoadError> {
	let s = Config::builder()
		.add_source(File::with_name(file).required(false))
		.add_source(env)
		.build()?;

	s.try_deserialize()
}
