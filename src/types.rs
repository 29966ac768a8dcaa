//! Core identity types: digests and structural node ids.

use std::fmt;

/// 32-byte SHA-256 digest of a record or of a pair of child digests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; 32]);

impl Digest {
    /// Wrap a raw 32-byte digest.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex rendering.
    ///
    /// This exact string is what re-enters the hasher when two digests are
    /// combined into a parent, so it must stay stable.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// First seven hex characters, used in display labels.
    pub fn short_hex(&self) -> String {
        self.to_hex()[..7].to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Structural identity of a node: its index in the tree arena.
///
/// Padding nodes duplicate digest values on purpose, so exports key nodes by
/// `NodeId` and treat digests as display data only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena index backing this id.
    pub fn index(self) -> usize {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_hex_roundtrip() {
        let digest = Digest::from_bytes([0xab; 32]);
        assert_eq!(digest.to_hex(), "ab".repeat(32));
        assert_eq!(digest.to_hex().len(), 64);
        assert_eq!(digest.short_hex(), "abababa");
    }

    #[test]
    fn test_digest_display_matches_hex() {
        let digest = Digest::from_bytes([0x01; 32]);
        assert_eq!(format!("{}", digest), digest.to_hex());
    }
}
