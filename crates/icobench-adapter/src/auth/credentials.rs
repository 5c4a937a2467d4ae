/*
[INPUT]:  Public key identifier and private signing key (direct or environment)
[OUTPUT]: Credentials used to authenticate every request
[POS]:    Auth layer - key pair ownership
[UPDATE]: When adding new credential sources
*/

use crate::http::{IcobenchError, Result};

use super::HmacSigner;

/// Environment variable holding the public key identifier
pub const PUBLIC_KEY_ENV: &str = "ICOBENCH_PUBLIC_KEY";
/// Environment variable holding the private signing key
pub const PRIVATE_KEY_ENV: &str = "ICOBENCH_PRIVATE_KEY";

/// API key pair for authenticated requests
#[derive(Debug, Clone)]
pub struct Credentials {
    public_key: String,
    signer: HmacSigner,
}

impl Credentials {
    /// Create credentials from the public identifier and the private key
    pub fn new(public_key: impl Into<String>, private_key: impl Into<Vec<u8>>) -> Self {
        Self {
            public_key: public_key.into(),
            signer: HmacSigner::new(private_key),
        }
    }

    /// Load credentials from `ICOBENCH_PUBLIC_KEY` and `ICOBENCH_PRIVATE_KEY`
    pub fn from_env() -> Result<Self> {
        let public_key = read_env(PUBLIC_KEY_ENV)?;
        let private_key = read_env(PRIVATE_KEY_ENV)?;
        Ok(Self::new(public_key, private_key))
    }

    /// Public key identifier sent in the `X-ICObench-Key` header
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Signer keyed with the private key
    pub fn signer(&self) -> &HmacSigner {
        &self.signer
    }
}

fn read_env(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(IcobenchError::Config(format!("{name} is empty"))),
        Err(e) => Err(IcobenchError::Config(format!("{name}: {e}"))),
    }
}
