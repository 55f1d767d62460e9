//! RFQ Maker Order Server
//!
//! Main entry point for the order server

use rfq_maker::OrderServerBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	OrderServerBuilder::new().start_server().await
}
