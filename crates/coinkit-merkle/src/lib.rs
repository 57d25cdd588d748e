//! Coinkit - Merkle root computation.
//!
//! Folds an ordered list of transaction hashes into a single root by
//! pairwise hashing, duplicating the last element of any odd-length level.

pub mod merkle_tree_parent;
pub mod merkle_root;

pub use merkle_tree_parent::{merkle_tree_parent, merkle_tree_parent_str, merkle_tree_parent_with};
pub use merkle_root::{
    generate_merkle_root, generate_merkle_root_with, generate_merkle_root_with_params, merkle_root,
    merkle_root_with,
};
