//! Chain parameters.
//!
//! Protocol constants that depend on the target network rather than on
//! the algorithms in this crate. Loaded from JSON or taken from
//! [`ChainParams::mainnet`].

use coinkit_primitives::HashKind;
use serde::{Deserialize, Serialize};

use crate::finality::LOCKTIME_THRESHOLD;
use crate::TransactionError;

/// Network-specific constants consumed by hashing and finality checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChainParams {
    /// Boundary between height-based and time-based locktimes.
    pub locktime_threshold: u32,
    /// Digest used for transaction identifiers and merkle nodes.
    pub hash: HashKind,
}

impl ChainParams {
    /// Bitcoin mainnet parameters.
    pub fn mainnet() -> Self {
        ChainParams {
            locktime_threshold: LOCKTIME_THRESHOLD,
            hash: HashKind::Sha256d,
        }
    }

    /// Parse parameters from JSON. Missing fields take mainnet values.
    ///
    /// # Returns
    /// The parameters, or `InvalidParams` if the JSON is malformed or the
    /// threshold is zero.
    pub fn from_json(json: &str) -> Result<Self, TransactionError> {
        let params: ChainParams = serde_json::from_str(json)
            .map_err(|e| TransactionError::InvalidParams(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// Reject parameter sets no network could use.
    pub fn validate(&self) -> Result<(), TransactionError> {
        if self.locktime_threshold == 0 {
            return Err(TransactionError::InvalidParams(
                "locktime_threshold must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ChainParams {
    fn default() -> Self {
        Self::mainnet()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_defaults() {
        let params = ChainParams::default();
        assert_eq!(params.locktime_threshold, 500_000_000);
        assert_eq!(params.hash, HashKind::Sha256d);
    }

    #[test]
    fn test_from_json_partial() {
        let params = ChainParams::from_json(r#"{"hash":"sha256"}"#).unwrap();
        assert_eq!(params.hash, HashKind::Sha256);
        assert_eq!(params.locktime_threshold, LOCKTIME_THRESHOLD);

        let params = ChainParams::from_json("{}").unwrap();
        assert_eq!(params, ChainParams::mainnet());
    }

    #[test]
    fn test_from_json_rejects_bad_input() {
        assert!(matches!(
            ChainParams::from_json(r#"{"locktime_threshold":0}"#),
            Err(TransactionError::InvalidParams(_))
        ));
        assert!(matches!(
            ChainParams::from_json(r#"{"hash":"md5"}"#),
            Err(TransactionError::InvalidParams(_))
        ));
        assert!(matches!(
            ChainParams::from_json(r#"{"unknown":1}"#),
            Err(TransactionError::InvalidParams(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let params = ChainParams {
            locktime_threshold: 123,
            hash: HashKind::Sha256,
        };
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"locktime_threshold":123,"hash":"sha256"}"#);
        assert_eq!(ChainParams::from_json(&json).unwrap(), params);
    }
}
