/// Coinkit - Digest type, hash primitives, and binary encoding helpers.
///
/// This crate provides the foundational building blocks shared by the
/// transaction, merkle, and wallet crates:
/// - Hash functions (SHA-256, SHA-256d) and the `HashPrimitive` capability
/// - Chain hash type for transaction and block identification
/// - Variable-length integer encoding with a binary reader and writer
/// - Amount formatting in major coin units

pub mod hash;
pub mod chainhash;
pub mod util;
pub mod amount;

mod error;
pub use error::PrimitivesError;
pub use chainhash::Hash;
pub use hash::{DoubleSha256, HashKind, HashPrimitive, Sha256};
