//! # Message Header
//!
//! Fixed 81-byte prefix of every message envelope.
//!
//! | Field | Offset | Width |
//! |-------|--------|-------|
//! | version | 0 | 1 |
//! | origin | 1 | 4 |
//! | sender | 5 | 32 |
//! | nonce | 37 | 4 |
//! | destination | 41 | 4 |
//! | recipient | 45 | 32 |
//! | optimisticSeconds | 77 | 4 |

use crate::errors::{CodecError, CodecResult};
use crate::view::{TypedView, ViewType};
use serde::{Deserialize, Serialize};
use shared_types::{Bytes32, DomainId};

/// Current envelope format version.
pub const MESSAGE_VERSION: u8 = 0;

/// Total header length in bytes.
pub const HEADER_LENGTH: usize = 81;

const OFFSET_VERSION: usize = 0;
const OFFSET_ORIGIN: usize = 1;
const OFFSET_SENDER: usize = 5;
const OFFSET_NONCE: usize = 37;
const OFFSET_DESTINATION: usize = 41;
const OFFSET_RECIPIENT: usize = 45;
const OFFSET_OPTIMISTIC_SECONDS: usize = 77;

/// Decoded message header.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Envelope format version.
    pub version: u8,
    /// Source domain.
    pub origin: DomainId,
    /// Sender identity on the source domain.
    pub sender: Bytes32,
    /// Per-origin nonce, starting at 1.
    pub nonce: u32,
    /// Target domain.
    pub destination: DomainId,
    /// Recipient identity on the target domain.
    pub recipient: Bytes32,
    /// Minimum delay before execution on the destination.
    pub optimistic_seconds: u32,
}

impl Header {
    /// Serialize to the 81-byte layout.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LENGTH);
        out.push(self.version);
        out.extend_from_slice(&self.origin.to_be_bytes());
        out.extend_from_slice(&self.sender);
        out.extend_from_slice(&self.nonce.to_be_bytes());
        out.extend_from_slice(&self.destination.to_be_bytes());
        out.extend_from_slice(&self.recipient);
        out.extend_from_slice(&self.optimistic_seconds.to_be_bytes());
        out
    }

    /// Parse an 81-byte header.
    pub fn decode(bytes: &[u8]) -> CodecResult<Self> {
        HeaderView::new(bytes)?.to_header()
    }
}

/// Typed view over header bytes.
#[derive(Clone, Copy, Debug)]
pub struct HeaderView<'a> {
    view: TypedView<'a>,
}

impl<'a> HeaderView<'a> {
    /// Wrap raw bytes, checking the length.
    pub fn new(bytes: &'a [u8]) -> CodecResult<Self> {
        Self::from_view(TypedView::new(bytes, ViewType::Header))
    }

    /// Wrap an existing view; it must be tagged `Header` and 81 bytes long.
    pub fn from_view(view: TypedView<'a>) -> CodecResult<Self> {
        let view = view.assert_type(ViewType::Header)?;
        if view.len() != HEADER_LENGTH {
            return Err(CodecError::NotAHeader { len: view.len() });
        }
        Ok(Self { view })
    }

    /// Underlying view.
    pub fn view(&self) -> TypedView<'a> {
        self.view
    }

    /// Envelope version.
    pub fn version(&self) -> CodecResult<u8> {
        Ok(self.view.index_u8(OFFSET_VERSION)?)
    }

    /// Source domain.
    pub fn origin(&self) -> CodecResult<DomainId> {
        Ok(self.view.index_u32(OFFSET_ORIGIN)?)
    }

    /// Sender identity.
    pub fn sender(&self) -> CodecResult<Bytes32> {
        Ok(self.view.index_bytes32(OFFSET_SENDER)?)
    }

    /// Message nonce.
    pub fn nonce(&self) -> CodecResult<u32> {
        Ok(self.view.index_u32(OFFSET_NONCE)?)
    }

    /// Target domain.
    pub fn destination(&self) -> CodecResult<DomainId> {
        Ok(self.view.index_u32(OFFSET_DESTINATION)?)
    }

    /// Recipient identity.
    pub fn recipient(&self) -> CodecResult<Bytes32> {
        Ok(self.view.index_bytes32(OFFSET_RECIPIENT)?)
    }

    /// Optimistic period in seconds.
    pub fn optimistic_seconds(&self) -> CodecResult<u32> {
        Ok(self.view.index_u32(OFFSET_OPTIMISTIC_SECONDS)?)
    }

    /// Decode every field.
    pub fn to_header(&self) -> CodecResult<Header> {
        Ok(Header {
            version: self.version()?,
            origin: self.origin()?,
            sender: self.sender()?,
            nonce: self.nonce()?,
            destination: self.destination()?,
            recipient: self.recipient()?,
            optimistic_seconds: self.optimistic_seconds()?,
        })
    }
}
