//! Shared test scaffolding for the eco crate.
//!
//! Tests run in two phases: a [`TestBuilder`] queues session data and mock upstream
//! endpoints, then `build()` returns a [`TestContext`] holding an in-memory session and the
//! mockito server standing in for the books API.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{
            BOOKS_PATH, FAVORITES_PATH, LOGIN_PATH, REGISTER_PATH, UNREACHABLE_API_URL,
        },
        fixtures::book::factory,
        TestBuilder, TestContext, TestError,
    };
}
