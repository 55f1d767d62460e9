//! Deterministic clock and nonce sources for examples and testing

use rfq_service::{Clock, NonceSource};

/// Clock frozen at a fixed Unix timestamp
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
	fn now_unix(&self) -> i64 {
		self.0
	}
}

/// Nonce source that always returns the same value, clamped to `max`
#[derive(Debug, Clone, Copy)]
pub struct FixedNonceSource(pub u32);

impl NonceSource for FixedNonceSource {
	fn next_nonce(&self, max: u32) -> u32 {
		self.0.min(max)
	}
}
