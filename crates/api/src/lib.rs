//! RFQ API
//!
//! Axum routes and handlers for the RFQ maker order server.

pub mod handlers;
pub mod router;
pub mod state;

pub use handlers::{ApiError, ErrorKind, ErrorResponse};
pub use router::{create_router, MAX_BODY_BYTES};
pub use state::AppState;
