/// Coinkit - Wallet-side spend construction.
///
/// Chooses which unspent outputs fund a payment and how much change it
/// leaves, behind a pluggable selection strategy.

pub mod selection;

pub use selection::{
    select_outputs, Greedy, SelectionAlgorithm, SelectionResult, SelectionStrategy,
    UnspentOutputInfo,
};
