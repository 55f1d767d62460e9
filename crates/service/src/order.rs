//! Order service
//!
//! Prices a validated swap request into a maker order with an expiration and
//! a nonce.

use std::sync::Arc;

use rfq_types::{Order, Price, PricingError, SwapRequest};
use thiserror::Error;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::nonce::{NonceSource, RandomNonceSource};

/// Failures while quoting a request that already passed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderServiceError {
	#[error("pricing error: {0}")]
	Pricing(#[from] PricingError),
}

/// Quote terms the service applies to every request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingPolicy {
	pub price: Price,
	pub expiration_secs: i64,
	pub max_nonce: u32,
}

impl Default for PricingPolicy {
	fn default() -> Self {
		Self {
			price: Price::default(),
			expiration_secs: 300,
			max_nonce: 99_999,
		}
	}
}

pub trait OrderServiceTrait: Send + Sync {
	/// Price a swap request into an order
	fn create_order(&self, request: &SwapRequest) -> Result<Order, OrderServiceError>;
}

#[derive(Clone)]
pub struct OrderService {
	policy: PricingPolicy,
	clock: Arc<dyn Clock>,
	nonce_source: Arc<dyn NonceSource>,
}

impl OrderService {
	pub fn new(policy: PricingPolicy) -> Self {
		Self {
			policy,
			clock: Arc::new(SystemClock),
			nonce_source: Arc::new(RandomNonceSource),
		}
	}

	pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
		self.clock = clock;
		self
	}

	pub fn with_nonce_source(mut self, nonce_source: Arc<dyn NonceSource>) -> Self {
		self.nonce_source = nonce_source;
		self
	}
}

impl Default for OrderService {
	fn default() -> Self {
		Self::new(PricingPolicy::default())
	}
}

impl OrderServiceTrait for OrderService {
	fn create_order(&self, request: &SwapRequest) -> Result<Order, OrderServiceError> {
		// Takers usually fix makerAmount, so the quote is always derived from it
		if !request.taker_amount.is_zero() {
			debug!(
				"Ignoring requested takerAmount {}, pricing from makerAmount {}",
				request.taker_amount, request.maker_amount
			);
		}

		let taker_amount = self.policy.price.apply(request.maker_amount)?;
		let expiration = self
			.clock
			.now_unix()
			.saturating_add(self.policy.expiration_secs);
		let nonce = self.nonce_source.next_nonce(self.policy.max_nonce);

		Ok(Order {
			maker_address: request.maker_address.clone(),
			taker_address: request.taker_address.clone(),
			maker_token: request.maker_token.clone(),
			taker_token: request.taker_token.clone(),
			maker_amount: request.maker_amount,
			taker_amount,
			expiration,
			nonce,
		})
	}
}
