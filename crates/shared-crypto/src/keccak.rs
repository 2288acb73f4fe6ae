//! # Keccak-256 Hashing
//!
//! The protocol hashes everything with keccak-256: message leaves, Merkle
//! nodes and attestation digests.

use sha3::{Digest, Keccak256};
use shared_types::Hash;

/// Prefix of an Ethereum signed 32-byte message.
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Hash data with keccak-256 (one-shot).
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Hash the concatenation of multiple inputs.
pub fn keccak256_concat(inputs: &[&[u8]]) -> Hash {
    let mut hasher = Keccak256::new();
    for input in inputs {
        hasher.update(input);
    }
    hasher.finalize().into()
}

/// Hash two Merkle nodes as `keccak(left || right)`.
pub fn hash_pair(left: &Hash, right: &Hash) -> Hash {
    keccak256_concat(&[left, right])
}

/// Digest an Ethereum signed message: `keccak(prefix || hash)`.
pub fn eth_signed_message_hash(hash: &Hash) -> Hash {
    keccak256_concat(&[ETH_SIGNED_MESSAGE_PREFIX, hash])
}
