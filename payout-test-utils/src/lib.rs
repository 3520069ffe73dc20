//! Test environment for the payout server.
//!
//! [`TestBuilder`] queues mock ESI endpoints and builds a [`TestContext`] holding a mockito
//! server, an `eve_esi::Client` pointed at it and an in-memory session.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{fixtures::esi::factory, TestBuilder, TestContext, TestError};
}
