//! Declarative setup for API integration tests.

use std::rc::Rc;

use faqdesk::api::{ApiClient, ApiConfig, MemoryTokenStore, ReqwestTransport};
use mockito::Server;

use crate::{RecordingListener, TestContext, TestError};

/// Builder for a [`TestContext`]
///
/// By default the client starts logged out; use [`TestBuilder::with_token`] to start with a
/// stored admin token.
#[derive(Default)]
pub struct TestBuilder {
    token: Option<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `token` stored as the admin token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Start the mock backend and build a client pointed at it
    pub async fn build(self) -> Result<TestContext, TestError> {
        let server = Server::new_async().await;

        let tokens = match self.token {
            Some(token) => MemoryTokenStore::with_token(token),
            None => MemoryTokenStore::default(),
        };
        let listener = Rc::new(RecordingListener::default());

        let api = ApiClient::new(
            ApiConfig::new(server.url()),
            ReqwestTransport::default(),
            Rc::new(tokens.clone()),
        )
        .with_session_listener(listener.clone());

        Ok(TestContext {
            server,
            api,
            tokens,
            listener,
        })
    }
}
