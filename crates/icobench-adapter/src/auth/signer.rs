/*
[INPUT]:  Payload bytes and the private API key
[OUTPUT]: Base64 HMAC-SHA384 signatures (X-ICObench-Sig header values)
[POS]:    Auth layer - cryptographic signing for request authentication
[UPDATE]: When changing signing algorithm or signature encoding
*/

use std::fmt;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha384;
use zeroize::Zeroizing;

type HmacSha384 = Hmac<Sha384>;

/// Length in bytes of a decoded signature (384 bits)
pub const SIGNATURE_LEN: usize = 48;

/// Sign `payload` with `private_key`.
///
/// Returns the standard (padded) base64 encoding of HMAC-SHA384 over the
/// payload bytes. An empty payload is signed as the empty byte sequence.
pub fn sign(private_key: &[u8], payload: &[u8]) -> String {
    BASE64.encode(mac(private_key, payload).finalize().into_bytes())
}

fn mac(private_key: &[u8], payload: &[u8]) -> HmacSha384 {
    // HMAC hashes or pads keys of any length, new_from_slice cannot fail here
    let mut mac = HmacSha384::new_from_slice(private_key).expect("HMAC accepts keys of any length");
    mac.update(payload);
    mac
}

/// HMAC-SHA384 request signer holding the private API key
///
/// The key is wiped from memory when the signer is dropped and is never
/// printed by `Debug`.
#[derive(Clone)]
pub struct HmacSigner {
    key: Zeroizing<Vec<u8>>,
}

impl HmacSigner {
    /// Create a signer from raw private key bytes
    pub fn new(private_key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: Zeroizing::new(private_key.into()),
        }
    }

    /// Sign a payload and return the base64 signature
    pub fn sign(&self, payload: &[u8]) -> String {
        sign(&self.key, payload)
    }

    /// Verify a base64 signature against a payload in constant time
    pub fn verify(&self, payload: &[u8], signature: &str) -> bool {
        let Ok(expected) = BASE64.decode(signature) else {
            return false;
        };
        mac(&self.key, payload).verify_slice(&expected).is_ok()
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner")
            .field("key", &"<redacted>")
            .finish()
    }
}
