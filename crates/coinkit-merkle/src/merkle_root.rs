//! Merkle root of an ordered list of hashes.
//!
//! Each level is reduced pairwise, left to right. A level with an odd
//! number of nodes first duplicates its last node; consensus depends on
//! this exact rule. The empty list has the null root and a single hash is
//! its own root.

use coinkit_primitives::{DoubleSha256, Hash, HashPrimitive};
use coinkit_transaction::{ChainParams, Transaction, TransactionEncoder, TransactionHasher};
use log::debug;

use crate::merkle_tree_parent::merkle_tree_parent_with;

/// Compute the merkle root of `hashes` with double SHA-256.
pub fn merkle_root(hashes: &[Hash]) -> Hash {
    merkle_root_with(&DoubleSha256, hashes)
}

/// Compute the merkle root of `hashes` with an arbitrary hash primitive.
///
/// `hashes` is only read; each level is built in a fresh buffer.
pub fn merkle_root_with<H: HashPrimitive + ?Sized>(primitive: &H, hashes: &[Hash]) -> Hash {
    match hashes {
        [] => return Hash::NULL,
        [only] => return *only,
        _ => {}
    }

    let mut level = hashes.to_vec();
    let mut depth = 0usize;
    while level.len() > 1 {
        if level.len() % 2 != 0 {
            let last = level[level.len() - 1];
            level.push(last);
        }
        debug!("merkle level {}: {} nodes", depth, level.len());
        level = level
            .chunks_exact(2)
            .map(|pair| merkle_tree_parent_with(primitive, &pair[0], &pair[1]))
            .collect();
        depth += 1;
    }
    level[0]
}

/// Compute the merkle root committing to `transactions` in block order.
///
/// Leaves are the plain transaction hashes (no sighash suffix).
pub fn generate_merkle_root(transactions: &[Transaction]) -> Hash {
    generate_merkle_root_with(&TransactionHasher::new(), &DoubleSha256, transactions)
}

/// Compute the merkle root of `transactions` using the digest configured
/// in `params` for both leaves and nodes.
pub fn generate_merkle_root_with_params(params: &ChainParams, transactions: &[Transaction]) -> Hash {
    generate_merkle_root_with(&TransactionHasher::from_params(params), &params.hash, transactions)
}

/// Compute the merkle root of `transactions` with an explicit leaf hasher
/// and node primitive.
pub fn generate_merkle_root_with<E, TH, H>(
    hasher: &TransactionHasher<E, TH>,
    primitive: &H,
    transactions: &[Transaction],
) -> Hash
where
    E: TransactionEncoder,
    TH: HashPrimitive,
    H: HashPrimitive + ?Sized,
{
    let leaves: Vec<Hash> = transactions
        .iter()
        .map(|tx| hasher.transaction_hash(tx))
        .collect();
    merkle_root_with(primitive, &leaves)
}
