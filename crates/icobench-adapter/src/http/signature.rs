/*
[INPUT]:  Endpoint URL, credentials and resolved payload bytes
[OUTPUT]: Signed request (X-ICObench-Key / X-ICObench-Sig headers + body)
[POS]:    HTTP layer - request signing for every endpoint
[UPDATE]: When changing signing headers or payload encoding
*/

use bytes::Bytes;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Url};
use serde::Serialize;

use crate::auth::Credentials;
use crate::http::{IcobenchError, Result};

/// Header carrying the public key identifier (`X-ICObench-Key`)
pub const PUBLIC_KEY_HEADER: HeaderName = HeaderName::from_static("x-icobench-key");
/// Header carrying the base64 HMAC-SHA384 body signature (`X-ICObench-Sig`)
pub const SIGNATURE_HEADER: HeaderName = HeaderName::from_static("x-icobench-sig");

const APPLICATION_JSON: &str = "application/json";

/// Request body bytes, resolved before signing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload(Bytes);

impl Payload {
    /// Empty body for endpoints that take no input
    pub fn empty() -> Self {
        Self(Bytes::new())
    }

    /// JSON-encode structured request data
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let encoded = serde_json::to_vec(value).map_err(IcobenchError::Encode)?;
        Ok(Self(Bytes::from(encoded)))
    }

    /// Use pre-encoded bytes as-is
    pub fn raw(bytes: impl Into<Bytes>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A POST request whose signature is bound to its body
///
/// The body is moved in and signed inside [`SignedRequest::new`], so the
/// signature header always covers exactly the bytes that are sent.
#[derive(Debug)]
pub struct SignedRequest {
    url: Url,
    headers: HeaderMap,
    body: Bytes,
}

impl SignedRequest {
    /// Sign `payload` and assemble the request headers
    pub fn new(url: Url, credentials: &Credentials, payload: Payload) -> Result<Self> {
        let body = payload.0;
        let signature = credentials.signer().sign(&body);

        let mut headers = HeaderMap::with_capacity(4);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(
            PUBLIC_KEY_HEADER,
            HeaderValue::from_str(credentials.public_key())?,
        );
        let mut signature = HeaderValue::from_str(&signature)?;
        signature.set_sensitive(true);
        headers.insert(SIGNATURE_HEADER, signature);

        Ok(Self { url, headers, body })
    }

    pub fn method(&self) -> Method {
        Method::POST
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Signature header value
    pub fn signature(&self) -> Option<&str> {
        self.headers
            .get(SIGNATURE_HEADER)
            .and_then(|value| value.to_str().ok())
    }

    /// Convert into a transport request
    pub(crate) fn into_request(self, http_client: &reqwest::Client) -> Result<reqwest::Request> {
        http_client
            .request(Method::POST, self.url)
            .headers(self.headers)
            .body(self.body)
            .build()
            .map_err(IcobenchError::Build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sign;
    use serde_json::json;

    fn url() -> Url {
        Url::parse("https://icobench.com/api/v1/icos/all").unwrap()
    }

    #[test]
    fn test_payload_json() {
        let payload = Payload::json(&json!({"page": 1})).unwrap();
        assert_eq!(payload.as_bytes(), br#"{"page":1}"#);
        assert!(Payload::empty().is_empty());
        assert_eq!(Payload::raw("abc").len(), 3);
    }

    #[test]
    fn test_payload_json_encode_failure() {
        use std::collections::HashMap;

        let mut value: HashMap<Vec<u8>, u8> = HashMap::new();
        value.insert(vec![1, 2], 3);

        let err = Payload::json(&value).unwrap_err();
        assert!(matches!(err, IcobenchError::Encode(_)));
        assert_eq!(err.phase(), crate::http::ErrorPhase::Encode);
    }

    #[test]
    fn test_signed_request_headers() {
        let credentials = Credentials::new("public-key", "private-key");
        let request =
            SignedRequest::new(url(), &credentials, Payload::raw(r#"{"page":1}"#)).unwrap();

        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.headers()[CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(request.headers()[ACCEPT], APPLICATION_JSON);
        assert_eq!(request.headers()[PUBLIC_KEY_HEADER], "public-key");
        assert_eq!(
            request.signature(),
            Some("uB/Yl+6Rsr72D9pncLmWwIaV5yto2KsymZ/9MfvolIlLMmI4oJKdxCEsLN+vKjtp")
        );
        assert!(request.headers()[SIGNATURE_HEADER].is_sensitive());
    }

    #[test]
    fn test_signature_covers_body() {
        let credentials = Credentials::new("public-key", "private-key");
        for payload in [Payload::empty(), Payload::raw("{}"), Payload::raw(r#"{"page":7}"#)] {
            let request = SignedRequest::new(url(), &credentials, payload).unwrap();
            let expected = sign(b"private-key", request.body());
            assert_eq!(request.signature(), Some(expected.as_str()));
        }
    }

    #[test]
    fn test_invalid_public_key_header() {
        let credentials = Credentials::new("bad\nkey", "private-key");
        let err = SignedRequest::new(url(), &credentials, Payload::empty()).unwrap_err();
        assert!(matches!(err, IcobenchError::InvalidHeader(_)));
    }

    #[test]
    fn test_into_request_keeps_body() {
        let credentials = Credentials::new("public-key", "private-key");
        let request = SignedRequest::new(url(), &credentials, Payload::raw("{}")).unwrap();
        let http_request = request.into_request(&reqwest::Client::new()).unwrap();

        assert_eq!(http_request.method(), Method::POST);
        assert_eq!(
            http_request.body().and_then(|body| body.as_bytes()),
            Some(&b"{}"[..])
        );
    }
}
