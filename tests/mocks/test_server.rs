//! Test server for integration tests

use std::sync::Arc;

use axum::Router;
use rfq_maker::mocks::{FixedClock, FixedNonceSource};
use rfq_maker::{OrderServerBuilder, Settings};
use tokio::task::JoinHandle;

/// Test server instance bound to an ephemeral port
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with default settings and real clock/nonces
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _) = OrderServerBuilder::new().start()?;
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server with a frozen clock and nonce
	#[allow(dead_code)]
	pub async fn spawn_deterministic(
		now: i64,
		nonce: u32,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _) = OrderServerBuilder::new()
			.with_clock(Arc::new(FixedClock(now)))
			.with_nonce_source(Arc::new(FixedNonceSource(nonce)))
			.start()?;
		Self::spawn_server_with_app(app).await
	}

	/// Spawn a test server with custom settings
	#[allow(dead_code)]
	pub async fn spawn_with_settings(
		settings: Settings,
	) -> Result<Self, Box<dyn std::error::Error>> {
		let (app, _) = OrderServerBuilder::new().with_settings(settings).start()?;
		Self::spawn_server_with_app(app).await
	}

	/// Common server spawning logic
	async fn spawn_server_with_app(app: Router) -> Result<Self, Box<dyn std::error::Error>> {
		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		Ok(Self { base_url, handle })
	}

	#[allow(dead_code)]
	pub fn url(&self, path: &str) -> String {
		format!("{}{}", self.base_url, path)
	}

	#[allow(dead_code)]
	pub fn abort(self) {
		self.handle.abort();
	}
}
