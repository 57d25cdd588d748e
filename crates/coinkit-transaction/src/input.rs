//! Transaction input referencing a previous output.
//!
//! Contains the outpoint being spent, the unlocking script, and the
//! sequence number. Provides binary serialization/deserialization
//! following the Bitcoin wire format.

use coinkit_primitives::util::{ByteReader, ByteWriter, VarInt};

use crate::outpoint::{OutPoint, OUTPOINT_SIZE};
use crate::script::Script;
use crate::TransactionError;

/// Sequence number marking an input as final.
pub const MAX_SEQUENCE_NUMBER: u32 = 0xFFFF_FFFF;

/// Smallest possible encoding of an input: outpoint, empty script, sequence.
pub(crate) const MIN_INPUT_SIZE: usize = OUTPOINT_SIZE + 1 + 4;

/// A single input in a transaction.
///
/// # Wire format
///
/// | Field              | Size             |
/// |--------------------|------------------|
/// | previous hash      | 32 bytes         |
/// | previous index     | 4 bytes (LE)     |
/// | script length      | VarInt           |
/// | unlocking_script   | variable         |
/// | sequence_number    | 4 bytes (LE)     |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransactionInput {
    /// The output being spent.
    pub previous_output: OutPoint,

    /// The unlocking script (scriptSig); empty when unsigned.
    pub unlocking_script: Script,

    /// Sequence number. `MAX_SEQUENCE_NUMBER` exempts the input from
    /// locktime enforcement.
    pub sequence_number: u32,
}

impl TransactionInput {
    /// Create an input spending `previous_output`.
    pub fn new(previous_output: OutPoint, unlocking_script: Script, sequence_number: u32) -> Self {
        TransactionInput {
            previous_output,
            unlocking_script,
            sequence_number,
        }
    }

    /// Create the single input of a coinbase transaction.
    ///
    /// The previous output is null and the script carries arbitrary
    /// miner-chosen data.
    pub fn coinbase(script: Script) -> Self {
        TransactionInput {
            previous_output: OutPoint::null(),
            unlocking_script: script,
            sequence_number: MAX_SEQUENCE_NUMBER,
        }
    }

    /// Whether this input is final, i.e. its sequence number is the maximum.
    pub fn is_final(&self) -> bool {
        self.sequence_number == MAX_SEQUENCE_NUMBER
    }

    /// Byte length of this input in wire format.
    pub fn encoded_len(&self) -> usize {
        let script_len = self.unlocking_script.len();
        OUTPOINT_SIZE + VarInt::from(script_len).length() + script_len + 4
    }

    /// Deserialize a `TransactionInput` from a `ByteReader`.
    ///
    /// # Returns
    /// `Ok(TransactionInput)` on success, or a `TransactionError` if the
    /// data is truncated or malformed.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let previous_output = OutPoint::read_from(reader)?;

        let script_bytes = reader.read_var_bytes().map_err(|e| {
            TransactionError::Serialization(format!("reading unlocking script: {}", e))
        })?;

        let sequence_number = reader.read_u32_le().map_err(|e| {
            TransactionError::Serialization(format!("reading sequence number: {}", e))
        })?;

        Ok(TransactionInput {
            previous_output,
            unlocking_script: Script::from_bytes(script_bytes),
            sequence_number,
        })
    }

    /// Serialize this `TransactionInput` into a `ByteWriter`.
    pub fn write_to(&self, writer: &mut ByteWriter) {
        self.previous_output.write_to(writer);
        writer.write_var_bytes(self.unlocking_script.to_bytes());
        writer.write_u32_le(self.sequence_number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coinkit_primitives::Hash;

    #[test]
    fn test_is_final() {
        let point = OutPoint::new(Hash::new([1; 32]), 0);
        assert!(TransactionInput::new(point, Script::new(), MAX_SEQUENCE_NUMBER).is_final());
        assert!(!TransactionInput::new(point, Script::new(), MAX_SEQUENCE_NUMBER - 1).is_final());
        assert!(!TransactionInput::new(point, Script::new(), 0).is_final());
    }

    #[test]
    fn test_coinbase_input() {
        let input = TransactionInput::coinbase(Script::from_bytes(&[0x03, 0x01, 0x02, 0x03]));
        assert!(input.previous_output.is_null());
        assert!(input.is_final());
    }

    #[test]
    fn test_encoded_len_matches_writer() {
        let input = TransactionInput::new(
            OutPoint::new(Hash::new([9; 32]), 2),
            Script::from_bytes(&[0x51; 300]),
            7,
        );
        let mut writer = ByteWriter::new();
        input.write_to(&mut writer);
        // 36 + 3-byte varint + 300 + 4
        assert_eq!(writer.len(), 343);
        assert_eq!(input.encoded_len(), writer.len());
    }
}
