// src/core/fingerprint.rs
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha224};

/// SHA-224 of the normalized page text, lowercase hex.
/// Compared for equality across runs, nothing more.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn compute(text: &str) -> Self {
        Self(hex::encode(Sha224::digest(text.as_bytes())))
    }

    pub fn as_str(&self) -> &str { &self.0 }
}

impl std::fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
