#![deny(missing_docs)]

//! Coinkit SDK - Complete SDK.
//!
//! Re-exports all Coinkit components for convenient single-crate usage.

pub use coinkit_primitives as primitives;
pub use coinkit_transaction as transaction;
pub use coinkit_merkle as merkle;
pub use coinkit_wallet as wallet;
