/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod error;
pub mod icos;
pub mod response;
pub mod signature;

pub use error::{ErrorPhase, IcobenchError, Result};
pub use response::RawResponse;
pub use signature::{PUBLIC_KEY_HEADER, Payload, SIGNATURE_HEADER, SignedRequest};

pub use client::{ClientConfig, DEFAULT_BASE_URL, IcobenchClient};
