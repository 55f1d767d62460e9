//! RFQ Service
//!
//! Quote computation for the RFQ maker order server.

pub mod clock;
pub mod nonce;
pub mod order;

pub use clock::{Clock, SystemClock};
pub use nonce::{NonceSource, RandomNonceSource};
pub use order::{OrderService, OrderServiceError, OrderServiceTrait, PricingPolicy};
