//! Core transaction type.
//!
//! Represents a complete transaction with version, inputs, outputs, and
//! locktime. Supports binary and hex serialization, hash computation,
//! coinbase detection, finality checks, and output value totals.

use std::fmt;

use coinkit_primitives::util::ByteReader;
use coinkit_primitives::Hash;

use crate::encode::{TransactionEncoder, WireEncoder};
use crate::finality;
use crate::hasher;
use crate::input::{TransactionInput, MIN_INPUT_SIZE};
use crate::output::{TransactionOutput, MIN_OUTPUT_SIZE};
use crate::params::ChainParams;
use crate::TransactionError;

/// A transaction consisting of a version, ordered inputs, ordered
/// outputs, and a lock time.
///
/// Equality is structural. The hash is never stored; it is recomputed
/// from the current field values on every call to [`Transaction::hash`].
///
/// # Wire format
///
/// | Field        | Size                      |
/// |--------------|---------------------------|
/// | version      | 4 bytes (LE)              |
/// | input count  | VarInt                    |
/// | inputs       | variable (per input)      |
/// | output count | VarInt                    |
/// | outputs      | variable (per output)     |
/// | lock_time    | 4 bytes (LE)              |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    /// Transaction format version.
    pub version: u32,

    /// Ordered list of transaction inputs.
    pub inputs: Vec<TransactionInput>,

    /// Ordered list of transaction outputs.
    pub outputs: Vec<TransactionOutput>,

    /// Lock time. If non-zero, the transaction is not final until the
    /// specified block height or Unix timestamp has passed, unless every
    /// input opts out through its sequence number.
    pub lock_time: u32,
}

impl Transaction {
    /// Create a new empty transaction with version 1 and lock time 0.
    pub fn new() -> Self {
        Transaction {
            version: 1,
            inputs: Vec::new(),
            outputs: Vec::new(),
            lock_time: 0,
        }
    }

    // -----------------------------------------------------------------
    // Deserialization
    // -----------------------------------------------------------------

    /// Parse a transaction from a hex-encoded string.
    pub fn from_hex(hex_str: &str) -> Result<Self, TransactionError> {
        let bytes = hex::decode(hex_str).map_err(|e| {
            TransactionError::Serialization(format!("invalid hex: {}", e))
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse a transaction from raw bytes.
    ///
    /// The byte slice must contain exactly one complete transaction with
    /// no trailing data.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TransactionError> {
        let mut reader = ByteReader::new(bytes);
        let tx = Self::read_from(&mut reader)?;
        if reader.remaining() != 0 {
            return Err(TransactionError::Serialization(format!(
                "trailing {} bytes after transaction",
                reader.remaining()
            )));
        }
        Ok(tx)
    }

    /// Deserialize a transaction from a `ByteReader`.
    ///
    /// Element counts are checked against the remaining bytes before any
    /// allocation, so a forged count cannot request an oversized buffer.
    pub fn read_from(reader: &mut ByteReader) -> Result<Self, TransactionError> {
        let version = reader.read_u32_le().map_err(|e| {
            TransactionError::Serialization(format!("reading version: {}", e))
        })?;

        let input_count = read_count(reader, "input", MIN_INPUT_SIZE)?;
        let mut inputs = Vec::with_capacity(input_count);
        for _ in 0..input_count {
            inputs.push(TransactionInput::read_from(reader)?);
        }

        let output_count = read_count(reader, "output", MIN_OUTPUT_SIZE)?;
        let mut outputs = Vec::with_capacity(output_count);
        for _ in 0..output_count {
            outputs.push(TransactionOutput::read_from(reader)?);
        }

        let lock_time = reader.read_u32_le().map_err(|e| {
            TransactionError::Serialization(format!("reading lock time: {}", e))
        })?;

        Ok(Transaction {
            version,
            inputs,
            outputs,
            lock_time,
        })
    }

    // -----------------------------------------------------------------
    // Serialization
    // -----------------------------------------------------------------

    /// Serialize this transaction to its canonical wire bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        WireEncoder.encode(self)
    }

    /// Serialize this transaction to a lowercase hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Return the size of the serialized transaction in bytes, without
    /// serializing it.
    pub fn size(&self) -> usize {
        WireEncoder.encoded_len(self)
    }

    // -----------------------------------------------------------------
    // Hashing
    // -----------------------------------------------------------------

    /// Compute the transaction identifier (double SHA-256 of the wire bytes).
    ///
    /// The digest is in internal byte order; its `Display` gives the
    /// conventional byte-reversed txid string.
    pub fn hash(&self) -> Hash {
        hasher::transaction_hash(self)
    }

    /// Compute the signature hash for `sighash_type`: the wire bytes with
    /// the type appended as 4 little-endian bytes, then hashed.
    pub fn signature_hash(&self, sighash_type: u32) -> Hash {
        hasher::signature_hash(self, sighash_type)
    }

    // -----------------------------------------------------------------
    // Inputs and outputs
    // -----------------------------------------------------------------

    /// Append a `TransactionInput` to this transaction.
    pub fn add_input(&mut self, input: TransactionInput) {
        self.inputs.push(input);
    }

    /// Return the number of inputs in the transaction.
    pub fn input_count(&self) -> usize {
        self.inputs.len()
    }

    /// Append a `TransactionOutput` to this transaction.
    pub fn add_output(&mut self, output: TransactionOutput) {
        self.outputs.push(output);
    }

    /// Return the number of outputs in the transaction.
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    /// Compute the sum of all output values.
    ///
    /// Values come from untrusted wire data, so the sum is checked.
    ///
    /// # Returns
    /// The total in satoshis, or `ArithmeticOverflow` if it exceeds `u64::MAX`.
    pub fn total_output_value(&self) -> Result<u64, TransactionError> {
        self.outputs.iter().try_fold(0u64, |total, output| {
            total
                .checked_add(output.value)
                .ok_or(TransactionError::ArithmeticOverflow)
        })
    }

    // -----------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------

    /// Determine whether this transaction is a coinbase transaction.
    ///
    /// A coinbase transaction has exactly one input, and that input spends
    /// the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        match self.inputs.as_slice() {
            [only] => only.previous_output.is_null(),
            _ => false,
        }
    }

    /// Whether this transaction is final at `block_height` / `block_time`
    /// under the default chain parameters.
    ///
    /// See [`finality::is_final`] for the rule.
    pub fn is_final(&self, block_height: u64, block_time: u32) -> bool {
        finality::is_final(self, finality::LOCKTIME_THRESHOLD, block_height, block_time)
    }

    /// Whether this transaction is final at `block_height` / `block_time`
    /// using the locktime threshold from `params`.
    pub fn is_final_with(&self, params: &ChainParams, block_height: u64, block_time: u32) -> bool {
        finality::is_final(self, params.locktime_threshold, block_height, block_time)
    }

    // -----------------------------------------------------------------
    // Presentation
    // -----------------------------------------------------------------

    /// Render a multi-line, human-readable description of every field.
    pub fn pretty(&self) -> String {
        Pretty(self).to_string()
    }
}

/// Multi-line rendering behind [`Transaction::pretty`].
struct Pretty<'a>(&'a Transaction);

impl fmt::Display for Pretty<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tx = self.0;
        writeln!(f, "Transaction:")?;
        writeln!(f, "\tversion = {}", tx.version)?;
        writeln!(f, "\tlocktime = {}", tx.lock_time)?;
        writeln!(f, "Inputs:")?;
        for input in &tx.inputs {
            writeln!(f, "\thash = {}", input.previous_output.txid)?;
            writeln!(f, "\tindex = {}", input.previous_output.index)?;
            writeln!(f, "\t{}", input.unlocking_script)?;
            writeln!(f, "\tsequence = {}", input.sequence_number)?;
        }
        writeln!(f, "Outputs:")?;
        for output in &tx.outputs {
            writeln!(f, "\tvalue = {}", output.value)?;
            writeln!(f, "\t{}", output.locking_script)?;
        }
        writeln!(f)
    }
}

/// Read an element count and reject it if `remaining` bytes could not hold
/// that many elements of at least `min_size` bytes each.
fn read_count(
    reader: &mut ByteReader,
    what: &str,
    min_size: usize,
) -> Result<usize, TransactionError> {
    let count = reader.read_varint().map_err(|e| {
        TransactionError::Serialization(format!("reading {} count: {}", what, e))
    })?;
    let max = (reader.remaining() / min_size) as u64;
    if count.value() > max {
        return Err(TransactionError::MalformedInput(format!(
            "{} count {} exceeds the {} remaining bytes",
            what,
            count.value(),
            reader.remaining()
        )));
    }
    Ok(count.value() as usize)
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Transaction {
    /// Display the transaction as its hex-encoded serialization.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}
