//! # XDM-01 Message Codec
//!
//! Bit-exact encodings of everything the origin engine hashes or verifies.
//!
//! ## Layouts
//!
//! ```text
//! message     = header(81) || tips(>=49) || body(0..=2048)
//! header      = version(1) origin(4) sender(32) nonce(4) destination(4)
//!               recipient(32) optimisticSeconds(4)
//! tips        = version(1) notary(12) broadcaster(12) prover(12) executor(12)
//! attestation = origin(4) nonce(4) root(32) || signature(65)
//! ```
//!
//! All integers are big-endian; nothing is padded.
//!
//! ## Module Structure
//!
//! ```text
//! xdm-01-message-codec/
//! ├── view         # TypedView: borrowed, tagged, bounds-checked slices
//! ├── header       # Header value + HeaderView accessors
//! ├── tips         # Tips value + total_tips
//! ├── message      # frame(), Message, MessageView
//! └── attestation  # AttestationData, Attestation, AttestationView
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attestation;
pub mod errors;
pub mod header;
pub mod message;
pub mod tips;
pub mod view;

// Re-exports
pub use attestation::{
    is_attestation, Attestation, AttestationData, AttestationView, ATTESTATION_DATA_LENGTH,
    ATTESTATION_LENGTH, SIGNATURE_LENGTH,
};
pub use errors::{CodecError, CodecResult, ViewError, ViewResult};
pub use header::{Header, HeaderView, HEADER_LENGTH, MESSAGE_VERSION};
pub use message::{destination_and_nonce, frame, Message, MessageView, MAX_MESSAGE_BODY_BYTES};
pub use tips::{total_tips, Tips, TipsView, TIPS_LENGTH, TIPS_VERSION};
pub use view::{concat, TypedView, ViewType};
