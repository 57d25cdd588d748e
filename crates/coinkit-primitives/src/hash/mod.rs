//! Hash function primitives.
//!
//! Provides SHA-256 and double SHA-256, plus the `HashPrimitive` capability
//! through which the transaction hasher and merkle builder receive their
//! digest function. Callers that need a different round count or a test
//! double implement `HashPrimitive` themselves.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256 as Sha256Engine};

use crate::chainhash::Hash;

/// Compute SHA-256 hash of the input data.
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte SHA-256 digest.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256Engine::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 (SHA-256d) hash of the input data.
///
/// This is the standard Bitcoin hash function used for transaction IDs
/// and merkle nodes. Computes SHA-256(SHA-256(data)).
///
/// # Arguments
/// * `data` - Byte slice to hash.
///
/// # Returns
/// A 32-byte double-SHA-256 digest.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// A hash function mapping an arbitrary byte buffer to a fixed-width [`Hash`].
///
/// The digest is produced in a single call over the full buffer; whatever
/// round count the target protocol requires lives inside the implementation.
pub trait HashPrimitive {
    /// Digest `data` into a 32-byte hash.
    fn digest(&self, data: &[u8]) -> Hash;
}

impl<T: HashPrimitive + ?Sized> HashPrimitive for &T {
    fn digest(&self, data: &[u8]) -> Hash {
        (**self).digest(data)
    }
}

/// Single-round SHA-256.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sha256;

impl HashPrimitive for Sha256 {
    fn digest(&self, data: &[u8]) -> Hash {
        Hash::new(sha256(data))
    }
}

/// Double SHA-256, the Bitcoin transaction and merkle digest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DoubleSha256;

impl HashPrimitive for DoubleSha256 {
    fn digest(&self, data: &[u8]) -> Hash {
        Hash::new(sha256d(data))
    }
}

/// Runtime selection of a built-in hash primitive.
///
/// Used by configuration so a deployment can name the digest its network
/// expects without recompiling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashKind {
    /// Single-round SHA-256.
    Sha256,
    /// Double SHA-256.
    #[default]
    Sha256d,
}

impl HashPrimitive for HashKind {
    fn digest(&self, data: &[u8]) -> Hash {
        match self {
            HashKind::Sha256 => Sha256.digest(data),
            HashKind::Sha256d => DoubleSha256.digest(data),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_DATA: &[u8] = b"this is the data I want to hash";

    // ---- SHA-256d (double SHA-256) ----

    #[test]
    fn test_sha256d_empty_string() {
        let hash = sha256d(b"");
        assert_eq!(
            hex::encode(hash),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn test_sha256d_string() {
        let hash = sha256d(TEST_DATA);
        assert_eq!(
            hex::encode(hash),
            "2209ddda5914a3fbad507ff2284c4b6e559c18a669f9fc3ad3b5826a2a999d58"
        );
    }

    // ---- SHA-256 ----

    #[test]
    fn test_sha256_empty_string() {
        let hash = sha256(b"");
        assert_eq!(
            hex::encode(hash),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_string() {
        let hash = sha256(TEST_DATA);
        assert_eq!(
            hex::encode(hash),
            "f88eec7ecabf88f9a64c4100cac1e0c0c4581100492137d1b656ea626cad63e3"
        );
    }

    // ---- HashPrimitive ----

    #[test]
    fn test_primitives_match_free_functions() {
        assert_eq!(Sha256.digest(TEST_DATA).as_bytes(), &sha256(TEST_DATA));
        assert_eq!(DoubleSha256.digest(TEST_DATA).as_bytes(), &sha256d(TEST_DATA));
    }

    #[test]
    fn test_hash_kind_dispatch() {
        assert_eq!(HashKind::Sha256.digest(TEST_DATA), Sha256.digest(TEST_DATA));
        assert_eq!(HashKind::Sha256d.digest(TEST_DATA), DoubleSha256.digest(TEST_DATA));
        assert_eq!(HashKind::default(), HashKind::Sha256d);
    }

    #[test]
    fn test_hash_kind_by_reference() {
        let kind = HashKind::Sha256;
        let by_ref: &dyn HashPrimitive = &kind;
        assert_eq!(by_ref.digest(b"").as_bytes(), &sha256(b""));
    }
}
