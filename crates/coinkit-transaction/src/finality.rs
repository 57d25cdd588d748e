//! Transaction finality.
//!
//! A transaction with a zero locktime is final. Otherwise the locktime is
//! read as a block height (below the threshold) or a Unix timestamp (at or
//! above it). Once the chain has passed that point the transaction is final
//! whatever its inputs say; before then it is final only if every input
//! carries the maximum sequence number.

use crate::input::TransactionInput;
use crate::transaction::Transaction;

/// Locktime values below this are block heights; values at or above it
/// are Unix timestamps.
pub const LOCKTIME_THRESHOLD: u32 = 500_000_000;

/// A raw locktime classified against a height/time threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LockTime {
    /// Locktime zero: no absolute lock.
    Unlocked,
    /// Locked until the chain is past this block height.
    BlockHeight(u32),
    /// Locked until the chain is past this Unix time.
    Timestamp(u32),
}

impl LockTime {
    /// Classify `value` using `threshold` as the height/time boundary.
    pub fn from_consensus(value: u32, threshold: u32) -> Self {
        if value == 0 {
            LockTime::Unlocked
        } else if value < threshold {
            LockTime::BlockHeight(value)
        } else {
            LockTime::Timestamp(value)
        }
    }

    /// Whether the lock has elapsed at `block_height` / `block_time`.
    ///
    /// The comparison is strict: a lock at height `h` has elapsed only in
    /// blocks above `h`.
    pub fn is_satisfied_by(&self, block_height: u64, block_time: u32) -> bool {
        match *self {
            LockTime::Unlocked => true,
            LockTime::BlockHeight(height) => u64::from(height) < block_height,
            LockTime::Timestamp(time) => time < block_time,
        }
    }
}

/// Whether `input` is final.
pub fn is_final_input(input: &TransactionInput) -> bool {
    input.is_final()
}

/// Whether `tx` is final at `block_height` / `block_time`, classifying its
/// locktime against `threshold`.
pub fn is_final(tx: &Transaction, threshold: u32, block_height: u64, block_time: u32) -> bool {
    if LockTime::from_consensus(tx.lock_time, threshold).is_satisfied_by(block_height, block_time) {
        return true;
    }
    tx.inputs.iter().all(is_final_input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MAX_SEQUENCE_NUMBER;
    use crate::{OutPoint, Script};
    use coinkit_primitives::Hash;

    fn tx_with(lock_time: u32, sequences: &[u32]) -> Transaction {
        let mut tx = Transaction::new();
        tx.lock_time = lock_time;
        for (i, &seq) in sequences.iter().enumerate() {
            tx.add_input(TransactionInput::new(
                OutPoint::new(Hash::new([0x42; 32]), i as u32),
                Script::new(),
                seq,
            ));
        }
        tx
    }

    #[test]
    fn test_classification() {
        assert_eq!(LockTime::from_consensus(0, LOCKTIME_THRESHOLD), LockTime::Unlocked);
        assert_eq!(LockTime::from_consensus(1, LOCKTIME_THRESHOLD), LockTime::BlockHeight(1));
        assert_eq!(
            LockTime::from_consensus(LOCKTIME_THRESHOLD - 1, LOCKTIME_THRESHOLD),
            LockTime::BlockHeight(LOCKTIME_THRESHOLD - 1)
        );
        assert_eq!(
            LockTime::from_consensus(LOCKTIME_THRESHOLD, LOCKTIME_THRESHOLD),
            LockTime::Timestamp(LOCKTIME_THRESHOLD)
        );
    }

    #[test]
    fn test_zero_locktime_is_final_regardless_of_sequence() {
        let tx = tx_with(0, &[0, 1, MAX_SEQUENCE_NUMBER]);
        assert!(tx.is_final(0, 0));
    }

    #[test]
    fn test_height_lock_pending_with_open_input() {
        let tx = tx_with(1000, &[MAX_SEQUENCE_NUMBER, 0]);
        assert!(!tx.is_final(999, u32::MAX));
    }

    #[test]
    fn test_height_lock_boundary_is_strict() {
        let tx = tx_with(1000, &[0]);
        assert!(!tx.is_final(1000, u32::MAX));
        assert!(tx.is_final(1001, 0));
    }

    #[test]
    fn test_height_lock_ignores_block_time() {
        // A huge block time must not satisfy a height lock.
        let tx = tx_with(1000, &[0]);
        assert!(!tx.is_final(10, u32::MAX));
    }

    #[test]
    fn test_time_lock() {
        let lock = 1_600_000_000;
        let tx = tx_with(lock, &[0]);
        assert!(!tx.is_final(u64::MAX, lock));
        assert!(tx.is_final(0, lock + 1));
    }

    #[test]
    fn test_all_final_inputs_override_pending_lock() {
        let tx = tx_with(1000, &[MAX_SEQUENCE_NUMBER, MAX_SEQUENCE_NUMBER]);
        assert!(tx.is_final(0, 0));
    }

    #[test]
    fn test_no_inputs_with_pending_lock_is_final() {
        let tx = tx_with(1000, &[]);
        assert!(tx.is_final(0, 0));
    }

    #[test]
    fn test_height_beyond_u32() {
        let tx = tx_with(LOCKTIME_THRESHOLD - 1, &[0]);
        assert!(tx.is_final(u64::from(u32::MAX) + 1, 0));
    }

    #[test]
    fn test_custom_threshold() {
        let params = crate::ChainParams {
            locktime_threshold: 100,
            ..Default::default()
        };
        // 150 is a timestamp under a threshold of 100.
        let tx = tx_with(150, &[0]);
        assert!(!tx.is_final_with(&params, 1_000, 150));
        assert!(tx.is_final_with(&params, 0, 151));
        // Under the default threshold it is a height.
        assert!(tx.is_final(151, 0));
    }
}
