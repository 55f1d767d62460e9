//! RFQ Maker Library
//!
//! An example market maker order server for request-for-quote swaps: it
//! answers `POST /getOrder` with an unsigned, priced maker order.

use rfq_service::{Clock, NonceSource, OrderService, PricingPolicy};

// Core domain types
pub use rfq_types::{
	serde_json, Order, OrderRequest, OrderResponse, OrderValidationError, Price, PricingError,
	SwapRequest, TokenAmount,
};

// Service layer
pub use rfq_service::{
	OrderServiceError, OrderServiceTrait, RandomNonceSource, SystemClock,
};

// API layer
pub use rfq_api::{create_router, ApiError, AppState, ErrorKind, ErrorResponse};

// Config
pub use rfq_config::{load_config, Settings};

// Module aliases
pub mod models {
	pub use rfq_types::*;
}

pub mod config {
	pub use rfq_config::*;
}

pub mod api {
	pub use rfq_api::*;
}

pub mod service {
	pub use rfq_service::*;
}

pub mod mocks;

use rfq_config::{
	log_pricing_policy, log_service_info, log_service_shutdown, log_startup_complete,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Builder pattern for configuring the order server
#[derive(Default)]
pub struct OrderServerBuilder {
	settings: Option<Settings>,
	clock: Option<Arc<dyn Clock>>,
	nonce_source: Option<Arc<dyn NonceSource>>,
}

impl OrderServerBuilder {
	/// Create a new builder.
	///
	/// Without [`with_settings`](Self::with_settings), `start` uses the
	/// built-in defaults and `start_server` reads the config file and
	/// `RFQ_MAKER__*` environment.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Replace the wall clock used for expirations
	pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = Some(clock);
		self
	}

	/// Replace the random nonce source
	pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
		self.nonce_source = Some(nonce_source);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	fn pricing_policy(settings: &Settings) -> Result<PricingPolicy, Box<dyn std::error::Error>> {
		let pricing = &settings.pricing;
		Ok(PricingPolicy {
			price: pricing.price,
			expiration_secs: i64::try_from(pricing.expiration_secs)?,
			max_nonce: pricing.max_nonce,
		})
	}

	/// Initialize tracing with configuration-based settings
	///
	/// Fails when a global subscriber is already installed.
	pub fn init_tracing_from_settings(
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use rfq_config::LogFormat;

		// RUST_LOG wins over the configured level
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
		let structured = settings.logging.structured;

		let installed = match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if structured {
					subscriber.with_target(true).with_thread_ids(true).try_init()
				} else {
					subscriber.try_init()
				}
			},
		};
		installed.map_err(|e| -> Box<dyn std::error::Error> { e })?;

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Validate settings and return the configured router with state
	pub fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.unwrap_or_default();
		settings
			.validate()
			.map_err(|e| format!("Invalid configuration: {}", e))?;

		let mut order_service = OrderService::new(Self::pricing_policy(&settings)?);
		if let Some(clock) = self.clock {
			order_service = order_service.with_clock(clock);
		}
		if let Some(nonce_source) = self.nonce_source {
			order_service = order_service.with_nonce_source(nonce_source);
		}

		let app_state = AppState::new(Arc::new(order_service) as Arc<dyn OrderServiceTrait>);
		let router = create_router().with_state(app_state.clone());

		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	///
	/// Loads `.env`, resolves settings, initializes tracing, binds the
	/// listener and serves until Ctrl+C.
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		dotenvy::dotenv().ok();

		let using_provided_settings = self.settings.is_some();
		let settings = match self.settings.take() {
			Some(settings) => settings,
			None => load_config()?,
		};

		Self::init_tracing_from_settings(&settings)?;
		log_service_info();
		info!(
			"Configuration loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file, environment or defaults"
			}
		);
		log_pricing_policy(&settings);

		let addr = settings.socket_addr()?;
		let bind_addr = settings.bind_address();
		self.settings = Some(settings);

		let (app, _) = self.start()?;
		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  POST /getOrder");

		axum::serve(listener, app)
			.with_graceful_shutdown(shutdown_signal())
			.await?;

		log_service_shutdown();
		Ok(())
	}
}

/// Resolves on Ctrl+C; never resolves if the handler cannot be installed
async fn shutdown_signal() {
	match tokio::signal::ctrl_c().await {
		Ok(()) => info!("Received shutdown signal (Ctrl+C)"),
		Err(e) => {
			warn!("Failed to listen for shutdown signal: {}", e);
			std::future::pending::<()>().await;
		},
	}
}
