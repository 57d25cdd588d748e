//! Reference to a specific output of a specific transaction.

use std::fmt;

use coinkit_primitives::util::{ByteReader, ByteWriter};
use coinkit_primitives::Hash;
use serde::{Deserialize, Serialize};

use crate::TransactionError;

/// Encoded size of an outpoint: 32-byte hash plus 4-byte index.
pub const OUTPOINT_SIZE: usize = 36;

/// Identifies output `index` of the transaction whose hash is `txid`.
///
/// The null outpoint (`Hash::NULL`, `u32::MAX`) marks the nonexistent
/// previous output of a coinbase input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OutPoint {
    /// Hash of the transaction holding the output.
    pub txid: Hash,
    /// Position of the output within that transaction.
    pub index: u32,
}

impl OutPoint {
    /// Index value carried by the null outpoint.
    pub const NULL_INDEX: u32 = u32::MAX;

    /// Create an outpoint referencing `txid:index`.
    pub fn new(txid: Hash, index: u32) -> Self {
        OutPoint { txid, index }
    }

    /// The null outpoint referenced by coinbase inputs.
    pub fn null() -> Self {
        OutPoint {
            txid: Hash::NULL,
            index: Self::NULL_INDEX,
        }
    }

    /// Whether both the hash and the index carry their null values.
    pub fn is_null(&self) -> bool {
        self.index == Self::NULL_INDEX && self.txid.is_null()
    }

    /// Deserialize an outpoint: 32-byte hash then 4-byte LE index.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let txid = reader.read_hash().map_err(|e| {
            TransactionError::Serialization(format!("reading outpoint hash: {}", e))
        })?;
        let index = reader.read_u32_le().map_err(|e| {
            TransactionError::Serialization(format!("reading outpoint index: {}", e))
        })?;
        Ok(OutPoint { txid, index })
    }

    /// Serialize this outpoint into `writer`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        writer.write_hash(&self.txid);
        writer.write_u32_le(self.index);
    }
}

/// Renders as `<display hash>:<index>`.
impl fmt::Display for OutPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.txid, self.index)
    }
}
