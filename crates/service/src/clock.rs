//! Time source for quote expirations

use chrono::Utc;

/// Source of the current Unix time in seconds
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
	fn now_unix(&self) -> i64;
}

/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
	fn now_unix(&self) -> i64 {
		Utc::now().timestamp()
	}
}
