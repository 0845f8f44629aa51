use std::time::Duration;

use internhub::{
    api::{ApiClient, MemorySession},
    config::Config,
    data::HttpBackend,
};
use mockito::{Mock, ServerGuard};

use crate::transport::ReqwestTransport;

/// Base path the gateway is configured with, relative to the mock server.
pub const API_PREFIX: &str = "/api/v1";

pub type TestApi = ApiClient<ReqwestTransport, MemorySession>;
pub type TestBackend = HttpBackend<ReqwestTransport, MemorySession>;

/// A mock backend and the gateway pointed at it.
pub struct TestSetup {
    pub server: ServerGuard,
    pub session: MemorySession,
    pub config: Config,
    pub mocks: Vec<Mock>,
}

impl TestSetup {
    pub fn api(&self) -> TestApi {
        ApiClient::new(&self.config, ReqwestTransport::new(), self.session.clone())
    }

    pub fn backend(&self) -> TestBackend {
        HttpBackend::new(self.api())
    }

    /// Full mock path for an endpoint such as `/users/`.
    pub fn path(endpoint: &str) -> String {
        format!("{}{}", API_PREFIX, endpoint)
    }

    /// Asserts every mock registered through the builder was hit as expected.
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }

    pub(crate) fn config_for(server: &ServerGuard, timeout: Duration) -> Config {
        Config {
            api_url: format!("{}{}", server.url(), API_PREFIX),
            api_timeout: timeout,
            mock_latency: Duration::ZERO,
            ..Config::default()
        }
    }
}
