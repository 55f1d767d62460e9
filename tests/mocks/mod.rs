//! Centralized mocks and fixtures for testing
//!
//! Reusable request fixtures and a test server shared across test files.

pub mod api_fixtures;
pub mod test_server;

#[allow(unused_imports)]
pub use api_fixtures::ApiFixtures;
#[allow(unused_imports)]
pub use test_server::TestServer;
