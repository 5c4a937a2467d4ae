/*
[INPUT]:  Fully buffered HTTP response (status + body bytes)
[OUTPUT]: Raw bytes or typed JSON decoding
[POS]:    HTTP layer - response capture and decoding
[UPDATE]: When changing how responses are decoded
*/

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::http::{IcobenchError, Result};

/// Response body read entirely into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    status: StatusCode,
    body: Bytes,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: Bytes) -> Self {
        Self { status, body }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    /// Decode the body as JSON.
    ///
    /// The status code is not consulted; it is only kept for the error.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body).map_err(|e| IcobenchError::decode(self.status, e))
    }
}
