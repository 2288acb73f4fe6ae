//! # Codec Errors
//!
//! `ViewError` covers raw slicing; `CodecError` covers layout checks of the
//! typed envelopes built on top of views.

use crate::view::ViewType;
use thiserror::Error;

/// Errors raised by [`crate::TypedView`] operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ViewError {
    /// View carries a different tag than the accessor expects.
    #[error("Type assertion failed: observed {observed:?}, expected {expected:?}")]
    TypeMismatch {
        /// Tag carried by the view
        observed: ViewType,
        /// Tag the accessor requires
        expected: ViewType,
    },

    /// Requested range does not fit inside the backing bytes.
    #[error("Out of range: offset {offset}, len {len}, backing length {backing}")]
    OutOfRange {
        /// Requested offset
        offset: usize,
        /// Requested length
        len: usize,
        /// Length of the backing view
        backing: usize,
    },

    /// Integer reads are limited to 32 bytes.
    #[error("Invalid index width: {0} bytes (max 32)")]
    InvalidWidth(usize),
}

/// Errors raised while encoding or decoding envelopes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Underlying view operation failed.
    #[error(transparent)]
    View(#[from] ViewError),

    /// Header must be exactly 81 bytes.
    #[error("Not a header: {len} bytes")]
    NotAHeader {
        /// Observed length
        len: usize,
    },

    /// Tips must hold the version byte and four 12-byte values.
    #[error("Not tips: {len} bytes, need at least 49")]
    NotTips {
        /// Observed length
        len: usize,
    },

    /// A tip value does not fit in 12 bytes.
    #[error("Tip value overflows 96 bits: {0}")]
    TipOverflow(u128),

    /// Message is shorter than header plus declared tips.
    #[error("Malformed message: {len} bytes, need at least {min}")]
    MalformedMessage {
        /// Observed length
        len: usize,
        /// Minimum length for the declared tips
        min: usize,
    },

    /// Attestation must be exactly 105 bytes.
    #[error("Not an attestation: {len} bytes")]
    NotAnAttestation {
        /// Observed length
        len: usize,
    },
}

/// Result alias for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;
