//! Merkle tree parent computation.

use coinkit_primitives::chainhash::HASH_SIZE;
use coinkit_primitives::{DoubleSha256, Hash, HashPrimitive};

/// Compute the parent of two nodes with double SHA-256.
///
/// The hashes are in internal byte order and are concatenated directly,
/// left then right, with no separator.
pub fn merkle_tree_parent(left: &Hash, right: &Hash) -> Hash {
    merkle_tree_parent_with(&DoubleSha256, left, right)
}

/// Compute the parent of two nodes with an arbitrary hash primitive.
pub fn merkle_tree_parent_with<H: HashPrimitive + ?Sized>(
    primitive: &H,
    left: &Hash,
    right: &Hash,
) -> Hash {
    let mut concatenated = [0u8; HASH_SIZE * 2];
    concatenated[..HASH_SIZE].copy_from_slice(left.as_bytes());
    concatenated[HASH_SIZE..].copy_from_slice(right.as_bytes());
    primitive.digest(&concatenated)
}

/// Compute the Merkle tree parent of two children given as display-order hex.
///
/// The hex strings are byte-reversed txid strings as printed by block
/// explorers; the result is returned in the same form.
pub fn merkle_tree_parent_str(left: &str, right: &str) -> Result<String, hex::FromHexError> {
    let left = parse_display_hex(left)?;
    let right = parse_display_hex(right)?;
    Ok(merkle_tree_parent(&left, &right).to_string())
}

fn parse_display_hex(s: &str) -> Result<Hash, hex::FromHexError> {
    let mut bytes = [0u8; HASH_SIZE];
    hex::decode_to_slice(s, &mut bytes)?;
    bytes.reverse();
    Ok(Hash::new(bytes))
}
