//! Declarative setup for gateway integration tests.
//!
//! Mocks are queued on the builder and created on the mockito server during `build()`.

use std::time::Duration;

use internhub::api::MemorySession;
use mockito::{Mock, Server, ServerGuard};
use serde::Serialize;

use crate::{error::TestError, setup::TestSetup};

type MockBuilder = Box<dyn FnOnce(&mut ServerGuard) -> Mock>;

pub struct TestBuilder {
    token: Option<String>,
    timeout: Duration,
    mock_builders: Vec<MockBuilder>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no stored token and a 2 second timeout.
    pub fn new() -> Self {
        Self {
            token: None,
            timeout: Duration::from_secs(2),
            mock_builders: Vec::new(),
        }
    }

    /// Stores a bearer token in the session, as the login page would.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Queues an arbitrary mock.
    pub fn with_mock<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Queues a mock answering `method endpoint` with `status` and `body` serialized as JSON.
    ///
    /// # Arguments
    /// - `method` - HTTP method, e.g. `"GET"`
    /// - `endpoint` - Path below the API prefix, e.g. `"/users/"`
    /// - `status` - Response status code
    /// - `body` - Response body
    /// - `expected_requests` - How many times the endpoint must be hit
    pub fn with_json_endpoint<B: Serialize>(
        self,
        method: &'static str,
        endpoint: &str,
        status: usize,
        body: &B,
        expected_requests: usize,
    ) -> Result<Self, TestError> {
        let path = TestSetup::path(endpoint);
        let body = serde_json::to_string(body)?;

        Ok(self.with_mock(move |server| {
            server
                .mock(method, path.as_str())
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(body)
                .expect(expected_requests)
                .create()
        }))
    }

    /// Starts the mock server and creates every queued mock.
    pub async fn build(self) -> Result<TestSetup, TestError> {
        let mut server = Server::new_async().await;
        let config = TestSetup::config_for(&server, self.timeout);

        let mocks = self
            .mock_builders
            .into_iter()
            .map(|builder| builder(&mut server))
            .collect();

        Ok(TestSetup {
            server,
            session: MemorySession::new(self.token.as_deref()),
            config,
            mocks,
        })
    }
}
