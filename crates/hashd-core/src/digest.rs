//! Content fingerprint: SHA-256 of the raw body, lowercase hex.

use sha2::{Digest, Sha256};

/// Length of a rendered digest (32 bytes, two hex chars each).
pub const DIGEST_HEX_LEN: usize = 64;

/// Hash arbitrary bytes with SHA-256 and return the lowercase hex digest.
///
/// Pure and infallible; the empty slice hashes to the well-known SHA-256
/// empty-input constant.
pub fn digest(body: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(body);
    hex::encode(hasher.finalize())
}
