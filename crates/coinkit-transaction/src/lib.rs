/// Coinkit - Transaction model, canonical encoding, and consensus rules.
///
/// Provides the Transaction type with its inputs, outputs, and output
/// references; the canonical wire encoder; the transaction hasher that
/// produces identifiers and signature hashes; and the finality and
/// coinbase classification rules used by block validation.

pub mod script;
pub mod outpoint;
pub mod input;
pub mod output;
pub mod transaction;
pub mod encode;
pub mod hasher;
pub mod finality;
pub mod params;

mod error;
pub use error::TransactionError;
pub use script::Script;
pub use outpoint::OutPoint;
pub use input::TransactionInput;
pub use output::TransactionOutput;
pub use transaction::Transaction;
pub use encode::{TransactionEncoder, WireEncoder};
pub use hasher::{signature_hash, transaction_hash, TransactionHasher};
pub use finality::{LockTime, LOCKTIME_THRESHOLD};
pub use params::ChainParams;
