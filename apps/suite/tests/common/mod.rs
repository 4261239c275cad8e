//! Common test utilities for the posts suite
//!
//! Every test gets its own [`Target`]: a fresh mock server by default, or the
//! configured real service when `POSTCHECK_LIVE` is set.

#![allow(dead_code)]

use postcheck_client::PostsClient;
use postcheck_shared_config::SuiteConfig;
use postcheck_test_utils::MockPostsServer;

/// The service a test runs against
pub struct Target {
    /// Keeps the mock server alive for the duration of the test
    server: Option<MockPostsServer>,
    pub client: PostsClient,
}

impl Target {
    /// Whether this target is the local mock server
    pub fn is_mock(&self) -> bool {
        self.server.is_some()
    }

    pub fn server(&self) -> Option<&MockPostsServer> {
        self.server.as_ref()
    }
}

/// Build the target selected by the environment
pub async fn target() -> Target {
    let config = SuiteConfig::from_env().expect("valid postcheck configuration");

    if config.live {
        return Target {
            server: None,
            client: PostsClient::new(config.api).expect("client for live service"),
        };
    }

    let server = MockPostsServer::start().await;
    let client = PostsClient::with_url(server.url()).expect("client for mock server");
    Target {
        server: Some(server),
        client,
    }
}
