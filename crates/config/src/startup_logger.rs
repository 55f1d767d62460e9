//! Service startup logging for the RFQ maker order server
//!
//! Prints a banner with service, platform and environment details when the
//! server boots and when it shuts down.

use crate::Settings;
use std::env;
use tracing::info;

const SERVICE_NAME: &str = "rfq-maker";

/// Logs service information at startup
pub fn log_service_info() {
	info!("=== RFQ Maker Order Server Starting ===");
	info!("🚀 Service: {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));

	info!("💻 Platform: {}", env::consts::OS);
	info!("🏗️ Architecture: {}", env::consts::ARCH);

	if let Ok(cwd) = env::current_dir() {
		info!("📁 Working Directory: {}", cwd.display());
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the pricing policy the server will quote with
pub fn log_pricing_policy(settings: &Settings) {
	let pricing = &settings.pricing;
	info!("💱 Price: {} taker units per maker unit", pricing.price);
	info!("⏳ Quote validity: {}s", pricing.expiration_secs);
	info!("🎲 Nonce range: 0..={}", pricing.max_nonce);
}

/// Logs service shutdown information
pub fn log_service_shutdown() {
	info!("🛑 RFQ Maker Order Server Shutting Down");
	info!(
		"🕒 Shutdown at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs startup completion
pub fn log_startup_complete(bind_address: &str) {
	info!("✅ RFQ Maker Order Server Started Successfully");
	info!("🌐 Server listening on: {}", bind_address);
	info!("📡 Ready to accept requests");
}
