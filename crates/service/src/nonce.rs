//! Nonce generation for quotes
//!
//! Nonces only distinguish quotes issued in the same second. They are not
//! unique and carry no security weight.

use rand::Rng;

/// Source of quote nonces
#[cfg_attr(test, mockall::automock)]
pub trait NonceSource: Send + Sync {
	/// Draw a nonce in `0..=max`
	fn next_nonce(&self, max: u32) -> u32;
}

/// Uniform nonces from the thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomNonceSource;

impl NonceSource for RandomNonceSource {
	fn next_nonce(&self, max: u32) -> u32 {
		rand::thread_rng().gen_range(0..=max)
	}
}
