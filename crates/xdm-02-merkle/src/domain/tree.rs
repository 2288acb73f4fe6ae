//! # Incremental Merkle Tree
//!
//! Fixed-depth append-only accumulator. `branch[i]` holds the left sibling
//! that the next level-`i` node will be paired with; slots above the highest
//! set bit of `count` are stale and never read.

use serde::{Deserialize, Serialize};
use shared_crypto::hash_pair;
use shared_types::{Hash, ZERO_HASH};

use super::errors::{MerkleError, MerkleResult};
use super::zeros::{zero_hash, ZERO_HASHES};

/// Tree depth.
pub const TREE_DEPTH: usize = 32;

/// Leaf capacity. Inserts are accepted while `count + 1 < MAX_LEAVES`.
pub const MAX_LEAVES: u64 = 1 << TREE_DEPTH;

/// Root of the tree with no leaves.
pub fn empty_root() -> Hash {
    ZERO_HASHES[TREE_DEPTH]
}

/// Depth-32 incremental keccak Merkle tree.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncrementalMerkleTree {
    branch: [Hash; TREE_DEPTH],
    count: u64,
}

impl Default for IncrementalMerkleTree {
    fn default() -> Self {
        Self::new()
    }
}

impl IncrementalMerkleTree {
    /// Empty tree.
    pub fn new() -> Self {
        Self {
            branch: [ZERO_HASH; TREE_DEPTH],
            count: 0,
        }
    }

    /// Number of inserted leaves.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Cached left siblings, one per level.
    pub fn branch(&self) -> &[Hash; TREE_DEPTH] {
        &self.branch
    }

    /// Append a leaf.
    ///
    /// Walks up from level 0 carrying `node`. At the first level where the
    /// new size is odd the node becomes that level's cached branch; below it
    /// the node is merged with the cached left sibling.
    pub fn insert(&mut self, leaf: Hash) -> MerkleResult<()> {
        if self.count + 1 >= MAX_LEAVES {
            return Err(MerkleError::TreeFull { count: self.count });
        }

        let mut node = leaf;
        let mut size = self.count + 1;
        for level in 0..TREE_DEPTH {
            if size & 1 == 1 {
                self.branch[level] = node;
                break;
            }
            node = hash_pair(&self.branch[level], &node);
            size >>= 1;
        }

        self.count += 1;
        Ok(())
    }

    /// Current root.
    pub fn root(&self) -> Hash {
        let mut acc = zero_hash(0);
        for level in 0..TREE_DEPTH {
            if (self.count >> level) & 1 == 1 {
                acc = hash_pair(&self.branch[level], &acc);
            } else {
                acc = hash_pair(&acc, &zero_hash(level));
            }
        }
        acc
    }
}
