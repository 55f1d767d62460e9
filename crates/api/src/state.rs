use std::sync::Arc;

use rfq_service::OrderServiceTrait;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub order_service: Arc<dyn OrderServiceTrait>,
}

impl AppState {
	pub fn new(order_service: Arc<dyn OrderServiceTrait>) -> Self {
		Self { order_service }
	}
}
