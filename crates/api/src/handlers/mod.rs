pub mod common;
pub mod health;
pub mod orders;

pub use common::{ApiError, ErrorKind, ErrorResponse};
pub use health::health;
pub use orders::get_order;
