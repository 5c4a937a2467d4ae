/*
[INPUT]:  API key pair supplied by the caller
[OUTPUT]: HMAC signer and credential holder
[POS]:    Auth layer - module wiring
[UPDATE]: When adding new credential sources or signing schemes
*/

pub mod credentials;
pub mod signer;

pub use credentials::{Credentials, PRIVATE_KEY_ENV, PUBLIC_KEY_ENV};
pub use signer::{HmacSigner, SIGNATURE_LEN, sign};
