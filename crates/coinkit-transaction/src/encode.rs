//! Canonical transaction encoding.
//!
//! The hasher and merkle builder never depend on a concrete byte layout;
//! they receive a [`TransactionEncoder`]. [`WireEncoder`] is the Bitcoin
//! wire layout and the default everywhere.

use coinkit_primitives::util::{ByteWriter, VarInt};

use crate::transaction::Transaction;

/// Deterministic encoder turning a transaction into canonical bytes.
pub trait TransactionEncoder {
    /// Exact number of bytes `encode_into` will write for `tx`.
    fn encoded_len(&self, tx: &Transaction) -> usize;

    /// Append the canonical encoding of `tx` to `writer`.
    fn encode_into(&self, tx: &Transaction, writer: &mut ByteWriter);

    /// Encode `tx` into a buffer sized up front from `encoded_len`.
    fn encode(&self, tx: &Transaction) -> Vec<u8> {
        encode_with_reserve(self, tx, 0).into_bytes()
    }
}

impl<T: TransactionEncoder + ?Sized> TransactionEncoder for &T {
    fn encoded_len(&self, tx: &Transaction) -> usize {
        (**self).encoded_len(tx)
    }

    fn encode_into(&self, tx: &Transaction, writer: &mut ByteWriter) {
        (**self).encode_into(tx, writer)
    }
}

/// Encode `tx` into a writer with `extra` spare bytes of capacity for a
/// caller-appended suffix.
///
/// # Panics
/// If the encoder writes a different number of bytes than it declared.
/// That is a broken encoder, not bad input.
pub(crate) fn encode_with_reserve<E: TransactionEncoder + ?Sized>(
    encoder: &E,
    tx: &Transaction,
    extra: usize,
) -> ByteWriter {
    let declared = encoder.encoded_len(tx);
    let mut writer = ByteWriter::with_capacity(declared + extra);
    encoder.encode_into(tx, &mut writer);
    assert_eq!(
        writer.len(),
        declared,
        "encoder wrote {} bytes but declared {}",
        writer.len(),
        declared
    );
    writer
}

/// The Bitcoin wire encoding.
///
/// version(4 LE) + varint(n_in) + inputs + varint(n_out) + outputs + locktime(4 LE).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WireEncoder;

impl TransactionEncoder for WireEncoder {
    fn encoded_len(&self, tx: &Transaction) -> usize {
        let inputs: usize = tx.inputs.iter().map(|i| i.encoded_len()).sum();
        let outputs: usize = tx.outputs.iter().map(|o| o.encoded_len()).sum();
        4 + VarInt::from(tx.inputs.len()).length()
            + inputs
            + VarInt::from(tx.outputs.len()).length()
            + outputs
            + 4
    }

    fn encode_into(&self, tx: &Transaction, writer: &mut ByteWriter) {
        writer.write_u32_le(tx.version);

        writer.write_varint(VarInt::from(tx.inputs.len()));
        for input in &tx.inputs {
            input.write_to(writer);
        }

        writer.write_varint(VarInt::from(tx.outputs.len()));
        for output in &tx.outputs {
            output.write_to(writer);
        }

        writer.write_u32_le(tx.lock_time);
    }
}
