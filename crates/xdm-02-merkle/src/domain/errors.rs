//! # Merkle Errors

use thiserror::Error;

/// Errors raised by the incremental tree.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MerkleError {
    /// Another insert would reach `2^32` leaves.
    #[error("Merkle tree full: {count} leaves")]
    TreeFull {
        /// Leaf count at the time of the rejected insert
        count: u64,
    },

    /// Leaf index outside the tree's capacity.
    #[error("Leaf index out of range: {0}")]
    IndexOutOfRange(u64),
}

/// Result alias for tree operations.
pub type MerkleResult<T> = Result<T, MerkleError>;
