//! Digest computation for tree nodes using SHA-256

use crate::types::Digest;
use sha2::{Digest as _, Sha256};

/// Compute the digest of a leaf record.
///
/// digest = sha256(utf8(record))
pub fn leaf_digest(record: &str) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(record.as_bytes());
    Digest::from_bytes(hasher.finalize().into())
}

/// Combine two child digests into a parent digest.
///
/// digest = sha256(hex(left) || hex(right))
///
/// Children are concatenated as lowercase hex strings, not raw bytes:
/// digests re-enter the hasher in the same text encoding leaves use, and the
/// convention must stay fixed end to end for roots to be reproducible.
pub fn combine(left: &Digest, right: &Digest) -> Digest {
    let mut hasher = Sha256::new();
    hasher.update(left.to_hex().as_bytes());
    hasher.update(right.to_hex().as_bytes());
    Digest::from_bytes(hasher.finalize().into())
}
