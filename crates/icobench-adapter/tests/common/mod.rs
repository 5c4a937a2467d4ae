/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for icobench-adapter tests

use std::time::Duration;

use icobench_adapter::{ClientConfig, Credentials, HmacSigner, IcobenchClient};
use wiremock::{Match, MockServer, Request};

pub const PUBLIC_KEY: &str = "public-key";
pub const PRIVATE_KEY: &str = "private-key";

/// Base64 HMAC-SHA384 of `{"page":1}` keyed with `private-key`
#[allow(dead_code)]
pub const PAGE_ONE_SIGNATURE: &str =
    "uB/Yl+6Rsr72D9pncLmWwIaV5yto2KsymZ/9MfvolIlLMmI4oJKdxCEsLN+vKjtp";

/// Setup a mock HTTP server for testing
#[allow(dead_code)]
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

#[allow(dead_code)]
pub fn test_credentials() -> Credentials {
    Credentials::new(PUBLIC_KEY, PRIVATE_KEY)
}

/// Client pointed at `{base}/api/v1/` with a short overall timeout
#[allow(dead_code)]
pub fn client_for_base(base: &str, timeout: Duration) -> IcobenchClient {
    let config = ClientConfig {
        base_url: format!("{base}/api/v1/"),
        timeout,
        ..ClientConfig::default()
    };
    IcobenchClient::with_config(test_credentials(), config).expect("client init")
}

#[allow(dead_code)]
pub fn client_for(server: &MockServer) -> IcobenchClient {
    client_for_base(&server.uri(), Duration::from_secs(5))
}

/// Matches requests whose `X-ICObench-Sig` verifies against their own body
#[allow(dead_code)]
pub struct ValidSignature(pub HmacSigner);

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("x-icobench-sig")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|signature| self.0.verify(&request.body, signature))
    }
}
