//! # Inclusion Proofs
//!
//! Recompute a root from a leaf, its 32 siblings and its index. Bit `i` of
//! the index says whether the running node is the right child at level `i`.

use shared_crypto::hash_pair;
use shared_types::Hash;

use super::errors::{MerkleError, MerkleResult};
use super::tree::{MAX_LEAVES, TREE_DEPTH};

/// Root implied by `leaf` at `index` with sibling path `proof`.
pub fn branch_root(leaf: Hash, proof: &[Hash; TREE_DEPTH], index: u64) -> MerkleResult<Hash> {
    if index >= MAX_LEAVES {
        return Err(MerkleError::IndexOutOfRange(index));
    }
    let mut node = leaf;
    for (level, sibling) in proof.iter().enumerate() {
        node = if (index >> level) & 1 == 1 {
            hash_pair(sibling, &node)
        } else {
            hash_pair(&node, sibling)
        };
    }
    Ok(node)
}
