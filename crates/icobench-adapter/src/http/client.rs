/*
[INPUT]:  HTTP configuration (base URL, timeouts, status policy) and credentials
[OUTPUT]: Configured client running the sign -> send -> buffer pipeline
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

use crate::auth::Credentials;
use crate::http::response::RawResponse;
use crate::http::signature::{Payload, SignedRequest};
use crate::http::{IcobenchError, Result};

/// Base URL for ICObench API v1
pub const DEFAULT_BASE_URL: &str = "https://icobench.com/api/v1/";

/// HTTP client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API root every endpoint path is joined onto
    pub base_url: String,
    /// Overall request timeout, including reading the body
    #[serde(rename = "timeout_secs", with = "duration_secs")]
    pub timeout: Duration,
    /// TCP connection dial timeout
    #[serde(rename = "connect_timeout_secs", with = "duration_secs")]
    pub connect_timeout: Duration,
    /// TLS handshake timeout
    #[serde(rename = "tls_handshake_timeout_secs", with = "duration_secs")]
    pub tls_handshake_timeout: Duration,
    /// Return `IcobenchError::Api` for non-2xx responses instead of decoding them
    pub reject_error_status: bool,
    /// `User-Agent` header sent with every request
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            tls_handshake_timeout: Duration::from_secs(5),
            reject_error_status: false,
            user_agent: concat!("icobench-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse configuration from YAML; missing fields keep their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| IcobenchError::Config(format!("invalid client config: {e}")))
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            IcobenchError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&content)
    }

    /// Bound applied to establishing a connection.
    ///
    /// reqwest times the TCP dial and the TLS handshake as one connect
    /// phase, so both budgets are summed.
    pub fn connect_phase_timeout(&self) -> Duration {
        self.connect_timeout + self.tls_handshake_timeout
    }

    fn build_http_client(&self) -> Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_phase_timeout())
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(|e| IcobenchError::Config(format!("failed to build HTTP client: {e}")))
    }
}

/// Main HTTP client for the ICObench API
///
/// Immutable after construction. Clones share the transport and the
/// credentials, and concurrent calls are independent of each other.
#[derive(Debug, Clone)]
pub struct IcobenchClient {
    http_client: Client,
    base_url: Url,
    credentials: Arc<Credentials>,
    reject_error_status: bool,
}

impl IcobenchClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http_client = config.build_http_client()?;
        Ok(Self {
            http_client,
            base_url: parse_base_url(&config.base_url)?,
            credentials: Arc::new(credentials),
            reject_error_status: config.reject_error_status,
        })
    }

    /// Create a client over a caller-supplied transport
    ///
    /// Timeouts are whatever `http_client` was built with.
    pub fn with_http_client(
        credentials: Credentials,
        base_url: &str,
        http_client: Client,
    ) -> Result<Self> {
        Ok(Self {
            http_client,
            base_url: parse_base_url(base_url)?,
            credentials: Arc::new(credentials),
            reject_error_status: false,
        })
    }

    /// Enable or disable rejecting non-2xx responses
    pub fn reject_error_status(mut self, reject: bool) -> Self {
        self.reject_error_status = reject;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn public_key(&self) -> &str {
        self.credentials.public_key()
    }

    /// Build full URL for an endpoint path such as `icos/all`
    ///
    /// The result always stays under the base URL. Absolute URLs, dot
    /// segments, queries and fragments are rejected.
    pub fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
        let path = endpoint.trim_start_matches('/');
        let invalid = || IcobenchError::InvalidEndpoint(endpoint.to_string());

        if Url::parse(path).is_ok() || path.contains(['?', '#', '\\']) {
            return Err(invalid());
        }
        if path.split('/').any(is_dot_segment) {
            return Err(invalid());
        }

        let url = self.base_url.join(path)?;
        if !url.as_str().starts_with(self.base_url.as_str()) {
            return Err(invalid());
        }
        Ok(url)
    }

    /// Build the signed request for an endpoint without sending it
    pub fn sign_request(&self, endpoint: &str, payload: Payload) -> Result<SignedRequest> {
        let url = self.endpoint_url(endpoint)?;
        SignedRequest::new(url, &self.credentials, payload)
    }

    /// Sign, send and fully buffer one request
    ///
    /// The body is returned whatever the HTTP status, unless
    /// `reject_error_status` is enabled.
    pub async fn call(&self, endpoint: &str, payload: Payload) -> Result<RawResponse> {
        let signed = self.sign_request(endpoint, payload)?;
        debug!(endpoint = endpoint, body_len = signed.body().len(), "sending signed request");

        let request = signed.into_request(&self.http_client)?;
        let started = Instant::now();
        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(IcobenchError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(IcobenchError::Read)?;
        debug!(
            endpoint = endpoint,
            status = status.as_u16(),
            bytes = body.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );

        if self.reject_error_status && !status.is_success() {
            return Err(IcobenchError::api_error(
                status,
                String::from_utf8_lossy(&body),
            ));
        }

        Ok(RawResponse::new(status, body))
    }

    /// Same as [`call`](Self::call), aborted early when `token` is cancelled
    pub async fn call_cancellable(
        &self,
        endpoint: &str,
        payload: Payload,
        token: &CancellationToken,
    ) -> Result<RawResponse> {
        tokio::select! {
            _ = token.cancelled() => {
                trace!(endpoint = endpoint, "request cancelled");
                Err(IcobenchError::Cancelled)
            }
            result = self.call(endpoint, payload) => result,
        }
    }

    /// Call an endpoint and decode the JSON response into `T`
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        payload: Payload,
    ) -> Result<T> {
        self.call(endpoint, payload).await?.json()
    }
}

fn is_dot_segment(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase().replace("%2e", ".");
    segment == "." || segment == ".."
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(serde::de::Error::custom)
    }
}
