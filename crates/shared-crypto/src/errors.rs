//! Crypto error types.

use thiserror::Error;

/// Signature recovery and signing errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CryptoError {
    /// Signature is not exactly 65 bytes
    #[error("Invalid signature length: expected 65, got {0}")]
    InvalidSigLen(usize),

    /// Recovery id is not 27 or 28 (after normalizing 0/1)
    #[error("Invalid signature v value: {0}")]
    InvalidSigV(u8),

    /// S lies in the upper half of the curve order (EIP-2)
    #[error("Invalid signature s value: s > n/2")]
    InvalidSigS,

    /// R or S out of range, or no public key recoverable
    #[error("Invalid signature")]
    InvalidSignature,

    /// Invalid private key
    #[error("Invalid private key")]
    InvalidPrivateKey,

    /// Signing failed
    #[error("Signing failed: {0}")]
    SigningFailed(String),
}
