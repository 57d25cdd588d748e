//! Transaction identifiers and signature hashes.
//!
//! A [`TransactionHasher`] pairs an encoder with a hash primitive. The
//! plain transaction hash digests the canonical encoding; the signature
//! hash digests the canonical encoding followed by the 4-byte
//! little-endian sighash type.

use coinkit_primitives::{DoubleSha256, Hash, HashKind, HashPrimitive};
use log::trace;

use crate::encode::{encode_with_reserve, TransactionEncoder, WireEncoder};
use crate::params::ChainParams;
use crate::transaction::Transaction;

// -----------------------------------------------------------------------
// Sighash type constants
// -----------------------------------------------------------------------

/// Sign all inputs and all outputs (the default).
pub const SIGHASH_ALL: u32 = 0x01;

/// Sign all inputs but no outputs.
pub const SIGHASH_NONE: u32 = 0x02;

/// Sign all inputs and only the output with the same index as the signed input.
pub const SIGHASH_SINGLE: u32 = 0x03;

/// Combined with another type: only sign the current input.
pub const SIGHASH_ANYONECANPAY: u32 = 0x80;

/// Size of the sighash type suffix appended to the signature preimage.
const SIGHASH_SUFFIX_LEN: usize = 4;

/// Computes transaction digests from an encoder and a hash primitive.
#[derive(Clone, Copy, Debug, Default)]
pub struct TransactionHasher<E = WireEncoder, H = DoubleSha256> {
    encoder: E,
    primitive: H,
}

impl TransactionHasher {
    /// Wire encoding hashed with double SHA-256.
    pub fn new() -> Self {
        Self::default()
    }
}

impl TransactionHasher<WireEncoder, HashKind> {
    /// Wire encoding hashed with the primitive named in `params`.
    pub fn from_params(params: &ChainParams) -> Self {
        TransactionHasher {
            encoder: WireEncoder,
            primitive: params.hash,
        }
    }
}

impl<E: TransactionEncoder, H: HashPrimitive> TransactionHasher<E, H> {
    /// Build a hasher from an explicit encoder and primitive.
    pub fn with_parts(encoder: E, primitive: H) -> Self {
        TransactionHasher { encoder, primitive }
    }

    /// Digest of the canonical encoding of `tx`.
    pub fn transaction_hash(&self, tx: &Transaction) -> Hash {
        let writer = encode_with_reserve(&self.encoder, tx, 0);
        let digest = self.primitive.digest(writer.as_bytes());
        trace!("hashed transaction ({} bytes): {}", writer.len(), digest);
        digest
    }

    /// Digest of the canonical encoding of `tx` followed by `sighash_type`
    /// as 4 little-endian bytes.
    pub fn signature_hash(&self, tx: &Transaction, sighash_type: u32) -> Hash {
        let mut writer = encode_with_reserve(&self.encoder, tx, SIGHASH_SUFFIX_LEN);
        writer.write_u32_le(sighash_type);
        let digest = self.primitive.digest(writer.as_bytes());
        trace!(
            "signature hash for type {:#04x} ({} bytes): {}",
            sighash_type,
            writer.len(),
            digest
        );
        digest
    }
}

/// Transaction identifier using the wire encoding and double SHA-256.
pub fn transaction_hash(tx: &Transaction) -> Hash {
    TransactionHasher::new().transaction_hash(tx)
}

/// Signature hash using the wire encoding and double SHA-256.
pub fn signature_hash(tx: &Transaction, sighash_type: u32) -> Hash {
    TransactionHasher::new().signature_hash(tx, sighash_type)
}
