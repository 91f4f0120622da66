//! Content fingerprints
//!
//! Provides [`Fingerprint`], a strongly-typed 32-byte Blake3 hash used to
//! identify generated artifacts by their content.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte content fingerprint (Blake3)
///
/// Two artifacts with the same archetype and the same field text always carry
/// the same fingerprint. Immutable and cheap to clone (Copy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Create a fingerprint from raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Create fingerprint from byte slice
    ///
    /// # Errors
    /// Returns error if slice length is not exactly 32 bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self, FingerprintError> {
        if bytes.len() != 32 {
            return Err(FingerprintError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 32];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }

    /// Compute a fingerprint over an ordered sequence of parts
    ///
    /// Each part is length-prefixed so `["ab", "c"]` and `["a", "bc"]` differ.
    #[must_use]
    pub fn compute_parts<'a, I>(parts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut hasher = blake3::Hasher::new();
        for part in parts {
            hasher.update(&(part.len() as u64).to_le_bytes());
            hasher.update(part.as_bytes());
        }
        Self::new(*hasher.finalize().as_bytes())
    }

    /// First eight bytes as a little-endian integer (used for seed salting)
    #[inline]
    #[must_use]
    pub fn prefix_u64(&self) -> u64 {
        let mut head = [0u8; 8];
        head.copy_from_slice(&self.0[..8]);
        u64::from_le_bytes(head)
    }
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        Self::from_slice(&bytes)
    }
}

impl serde::Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing fingerprints
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// Invalid hash length
    #[error("invalid fingerprint length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected byte count
        expected: usize,
        /// Actual byte count
        actual: usize,
    },

    /// Hex encoding error
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_are_deterministic() {
        assert_eq!(
            Fingerprint::compute_parts(["ad.pain", "acme"]),
            Fingerprint::compute_parts(["ad.pain", "acme"])
        );
        assert_ne!(
            Fingerprint::compute_parts(["ad.pain", "acme"]),
            Fingerprint::compute_parts(["ad.pain", "rival"])
        );
    }

    #[test]
    fn parts_are_length_prefixed() {
        let a = Fingerprint::compute_parts(["ab", "c"]);
        let b = Fingerprint::compute_parts(["a", "bc"]);
        assert_ne!(a, b);
    }

    #[test]
    fn display_and_parse() {
        let fp = Fingerprint::compute_parts(["headline"]);
        let parsed: Fingerprint = fp.to_string().parse().unwrap();
        assert_eq!(fp, parsed);
        assert_eq!(fp.prefix_u64().to_le_bytes(), fp.as_bytes()[..8]);
    }

    #[test]
    fn from_slice_rejects_short_input() {
        let result = Fingerprint::from_slice(&[1u8; 31]);
        assert!(matches!(
            result,
            Err(FingerprintError::InvalidLength { expected: 32, actual: 31 })
        ));
    }

    #[test]
    fn serde_uses_hex_string() {
        let fp = Fingerprint::compute_parts(["body"]);
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json.len(), 66);
        let decoded: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(fp, decoded);
    }
}
