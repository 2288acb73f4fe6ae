//! # Shared Types Crate
//!
//! Primitive identifiers used across the XDM origin workspace.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: widths of hashes, addresses and domain ids
//!   are defined once here and reused by every crate.
//! - **Wire-first**: every type maps directly onto its big-endian byte layout;
//!   no type here carries padding or framing of its own.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
