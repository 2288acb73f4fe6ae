//! # XDM-02 Incremental Merkle Tree
//!
//! Append-only keccak-256 Merkle accumulator of fixed depth 32. Only the
//! rightmost filled node of each level is kept (`branch`), so insert and
//! root are both O(depth) and the whole tree is 33 words of state.
//!
//! ## Root Fold
//!
//! ```text
//! acc = Z[0]
//! for i in 0..32:
//!     bit i of count set   => acc = keccak(branch[i] || acc)
//!     bit i of count clear => acc = keccak(acc || Z[i])
//! ```
//!
//! where `Z[0] = 0x00..00` and `Z[i+1] = keccak(Z[i] || Z[i])`.
//!
//! ## Module Structure
//!
//! ```text
//! xdm-02-merkle/
//! └── domain/
//!     ├── zeros   # cached zero-subtree hashes
//!     ├── tree    # IncrementalMerkleTree
//!     ├── proof   # branch_root inclusion check
//!     └── errors  # MerkleError
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

// Re-exports
pub use domain::errors::{MerkleError, MerkleResult};
pub use domain::proof::branch_root;
pub use domain::tree::{empty_root, IncrementalMerkleTree, MAX_LEAVES, TREE_DEPTH};
pub use domain::zeros::{zero_hash, ZERO_HASHES};
