/// Error types for transaction operations.
#[derive(Debug, thiserror::Error)]
pub enum TransactionError {
    /// A value violates a structural precondition (e.g. an element count
    /// that the remaining bytes cannot possibly hold).
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// An error occurred during binary/hex deserialization.
    #[error("serialization error: {0}")]
    Serialization(String),
    /// A monetary sum or difference left the `u64` range.
    #[error("arithmetic overflow")]
    ArithmeticOverflow,
    /// Chain parameters could not be loaded or are inconsistent.
    #[error("invalid chain parameters: {0}")]
    InvalidParams(String),
    /// An underlying primitives error (forwarded from `coinkit-primitives`).
    #[error("primitives error: {0}")]
    Primitives(#[from] coinkit_primitives::PrimitivesError),
}
