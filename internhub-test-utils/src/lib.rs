//! Shared fixtures for the dashboards' integration tests.
//!
//! Tests build a [`TestSetup`] through [`TestBuilder`]: a mockito server standing in for the
//! REST backend, and an API gateway wired to it over a real HTTP transport.

pub mod builder;
pub mod error;
pub mod fixtures;
pub mod setup;
pub mod transport;

pub use builder::TestBuilder;
pub use error::TestError;
pub use setup::TestSetup;
pub use transport::ReqwestTransport;

pub mod prelude {
    pub use crate::{fixtures::factory, TestBuilder, TestError, TestSetup};
}
