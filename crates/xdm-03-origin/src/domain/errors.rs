//! # Domain Errors
//!
//! Every variant aborts the whole operation with no state change. Proven
//! fraud is not an error: `improper_attestation` returns `Ok(true)`.

use shared_crypto::CryptoError;
use shared_types::{Address, DomainId, U256};
use thiserror::Error;
use xdm_01_message_codec::CodecError;
use xdm_02_merkle::MerkleError;

/// Origin engine errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OriginError {
    /// Engine is in the Failed state.
    #[error("Origin is not active")]
    NotActive,

    /// `initialize` has not run yet.
    #[error("Origin is not initialized")]
    NotInitialized,

    /// Body exceeds the maximum length.
    #[error("Message body too long: {len} bytes (max {max})")]
    BodyTooLong {
        /// Observed length
        len: usize,
        /// Allowed maximum
        max: usize,
    },

    /// Tips do not add up to the amount paid.
    #[error("Tips mismatch: tips total {total}, paid {paid}")]
    TipsMismatch {
        /// Sum of the four tips
        total: U256,
        /// Amount attached to the dispatch
        paid: U256,
    },

    /// Attestation names another domain.
    #[error("Wrong domain: expected {expected}, got {actual}")]
    WrongDomain {
        /// Local domain
        expected: DomainId,
        /// Attested domain
        actual: DomainId,
    },

    /// Signer is not in the Notary set.
    #[error("Signer is not a notary: 0x{}", hex::encode(.0))]
    NotANotary(Address),

    /// Signature could not be recovered.
    #[error("Invalid signature: {0}")]
    Signature(#[from] CryptoError),

    /// Caller is not the owner.
    #[error("Caller is not the owner")]
    NotOwner,

    /// Caller is not the Notary manager.
    #[error("Caller is not the notary manager")]
    NotNotaryManager,

    /// `initialize` already ran.
    #[error("Origin already initialized")]
    AlreadyInitialized,

    /// Address has no deployed code.
    #[error("Not a contract: 0x{}", hex::encode(.0))]
    NotAContract(Address),

    /// Zero address where a real one is required.
    #[error("Zero address")]
    ZeroAddress,

    /// Configuration rejected by `validate`.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Envelope or attestation layout error.
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Tree error.
    #[error(transparent)]
    Merkle(#[from] MerkleError),
}

/// Result alias for origin operations.
pub type OriginResult<T> = Result<T, OriginError>;
