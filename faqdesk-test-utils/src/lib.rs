//! Shared setup for faqdesk integration tests.
//!
//! Tests build a [`TestContext`] with [`TestBuilder`]: a mockito server standing in for the FAQ
//! backend, an [`ApiClient`](faqdesk::api::ApiClient) pointed at it, the token store behind the
//! client, and a listener recording every session-end event.

pub mod builder;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod listener;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use listener::RecordingListener;

pub mod prelude {
    pub use crate::{
        fixtures::factory, RecordingListener, TestBuilder, TestContext, TestError,
    };
}
