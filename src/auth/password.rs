//! Credential hashing.
//!
//! Secrets are stored as deterministic SHA-256 hex digests: the same secret
//! always produces the same digest, so verification is a recompute-and-compare.
//! Any string is a valid input, including the empty string; rejecting weak or
//! empty secrets is the job of request validation, not this module.

use sha2::{Digest, Sha256};

/// Computes the storable digest of a plaintext secret.
pub fn digest(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recomputes the digest of `secret` and compares it to a stored digest.
pub fn matches(secret: &str, stored: &str) -> bool {
    digest(secret) == stored
}
