//! # Zero-Subtree Hashes
//!
//! `Z[i]` is the root of an all-empty subtree of height `i`. Computed once on
//! first use.

use lazy_static::lazy_static;
use shared_crypto::hash_pair;
use shared_types::{Hash, ZERO_HASH};

use super::tree::TREE_DEPTH;

lazy_static! {
    /// `Z[0..=32]`; `Z[32]` is the empty-tree root.
    pub static ref ZERO_HASHES: [Hash; TREE_DEPTH + 1] = {
        let mut zeros = [ZERO_HASH; TREE_DEPTH + 1];
        for level in 0..TREE_DEPTH {
            zeros[level + 1] = hash_pair(&zeros[level], &zeros[level]);
        }
        zeros
    };
}

/// `Z[level]`. Levels above 32 saturate to the empty-tree root.
pub fn zero_hash(level: usize) -> Hash {
    ZERO_HASHES[level.min(TREE_DEPTH)]
}
