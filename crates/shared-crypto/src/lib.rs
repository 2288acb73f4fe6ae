//! # Shared Crypto
//!
//! Hashing and signature primitives used by the origin engine.
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `keccak` | keccak-256 | Merkle leaves/nodes, attestation digests |
//! | `ecdsa` | secp256k1 | Notary signer recovery, Notary signing |
//!
//! ## Security Properties
//!
//! - **Low-S only (EIP-2)**: recovery rejects `s > n/2`
//! - **Recovery ids**: `v ∈ {27, 28}`, with `{0, 1}` normalized
//! - **Prefixed digests**: attestations are signed as Ethereum signed messages

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ecdsa;
pub mod errors;
pub mod keccak;

// Re-exports
pub use ecdsa::{
    address_from_pubkey, recover_address, recover_eth_signed, Secp256k1KeyPair, SIGNATURE_LENGTH,
};
pub use errors::CryptoError;
pub use keccak::{eth_signed_message_hash, hash_pair, keccak256, keccak256_concat};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
