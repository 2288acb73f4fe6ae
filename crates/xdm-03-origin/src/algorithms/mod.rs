//! # Algorithms Module
//!
//! Pure steps of the dispatch and attestation pipelines.

pub mod attestation;
pub mod dispatch;

pub use attestation::{compare_with_history, recover_attestation, SignedAttestation};
pub use dispatch::{prepare_message, PreparedMessage};
