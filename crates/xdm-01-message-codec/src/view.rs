//! # Typed Byte Views
//!
//! A `TypedView` is a borrowed slice plus a tag naming what the bytes are.
//! Views never own memory; the backing buffer must outlive every view cut
//! from it. All reads are bounds-checked and report offset, length and the
//! backing length on failure.

use crate::errors::{ViewError, ViewResult};
use serde::{Deserialize, Serialize};
use shared_crypto::keccak256;
use shared_types::{Hash, U256};

/// What a view's bytes are supposed to contain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewType {
    /// Untyped bytes.
    Unknown,
    /// 81-byte message header.
    Header,
    /// Tips blob.
    Tips,
    /// Message body.
    Body,
    /// Full message envelope.
    Message,
    /// 40-byte attestation data.
    AttestationData,
    /// 105-byte signed attestation.
    Attestation,
    /// 65-byte signature.
    Signature,
}

/// Borrowed, tagged view over a byte buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypedView<'a> {
    bytes: &'a [u8],
    tag: ViewType,
}

impl<'a> TypedView<'a> {
    /// Create a view with an explicit tag.
    pub fn new(bytes: &'a [u8], tag: ViewType) -> Self {
        Self { bytes, tag }
    }

    /// Create an untyped view.
    pub fn untyped(bytes: &'a [u8]) -> Self {
        Self::new(bytes, ViewType::Unknown)
    }

    /// Tag of this view.
    pub fn tag(&self) -> ViewType {
        self.tag
    }

    /// Number of bytes in the view.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the view is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Backing bytes of this view.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Re-tag the view without checking.
    pub fn cast(self, tag: ViewType) -> Self {
        Self { tag, ..self }
    }

    /// Fail unless the view carries `expected`.
    pub fn assert_type(self, expected: ViewType) -> ViewResult<Self> {
        if self.tag != expected {
            return Err(ViewError::TypeMismatch {
                observed: self.tag,
                expected,
            });
        }
        Ok(self)
    }

    /// Sub-view `[offset, offset + len)` carrying `tag`.
    pub fn slice(&self, offset: usize, len: usize, tag: ViewType) -> ViewResult<TypedView<'a>> {
        let end = self.checked_end(offset, len)?;
        Ok(TypedView::new(&self.bytes[offset..end], tag))
    }

    /// First `len` bytes.
    pub fn prefix(&self, len: usize, tag: ViewType) -> ViewResult<TypedView<'a>> {
        self.slice(0, len, tag)
    }

    /// Last `len` bytes.
    pub fn postfix(&self, len: usize, tag: ViewType) -> ViewResult<TypedView<'a>> {
        let offset = self.len().checked_sub(len).ok_or(ViewError::OutOfRange {
            offset: 0,
            len,
            backing: self.len(),
        })?;
        self.slice(offset, len, tag)
    }

    /// Read `width` bytes at `offset` as a big-endian unsigned integer.
    pub fn index(&self, offset: usize, width: usize) -> ViewResult<U256> {
        if width > 32 {
            return Err(ViewError::InvalidWidth(width));
        }
        let end = self.checked_end(offset, width)?;
        Ok(U256::from_big_endian(&self.bytes[offset..end]))
    }

    /// Read a 4-byte big-endian integer.
    pub fn index_u32(&self, offset: usize) -> ViewResult<u32> {
        let end = self.checked_end(offset, 4)?;
        let mut buf = [0u8; 4];
        buf.copy_from_slice(&self.bytes[offset..end]);
        Ok(u32::from_be_bytes(buf))
    }

    /// Read up to 16 bytes as a big-endian integer.
    pub fn index_u128(&self, offset: usize, width: usize) -> ViewResult<u128> {
        if width > 16 {
            return Err(ViewError::InvalidWidth(width));
        }
        let end = self.checked_end(offset, width)?;
        let mut buf = [0u8; 16];
        buf[16 - width..].copy_from_slice(&self.bytes[offset..end]);
        Ok(u128::from_be_bytes(buf))
    }

    /// Read a single byte.
    pub fn index_u8(&self, offset: usize) -> ViewResult<u8> {
        let end = self.checked_end(offset, 1)?;
        Ok(self.bytes[end - 1])
    }

    /// Read 32 raw bytes.
    pub fn index_bytes32(&self, offset: usize) -> ViewResult<[u8; 32]> {
        let end = self.checked_end(offset, 32)?;
        let mut out = [0u8; 32];
        out.copy_from_slice(&self.bytes[offset..end]);
        Ok(out)
    }

    /// keccak-256 of the viewed bytes.
    pub fn keccak(&self) -> Hash {
        keccak256(self.bytes)
    }

    /// Copy the viewed bytes into owned memory.
    pub fn to_vec(&self) -> Vec<u8> {
        self.bytes.to_vec()
    }

    /// Byte equality, ignoring tags.
    pub fn equal(&self, other: &TypedView<'_>) -> bool {
        self.bytes == other.bytes
    }

    /// `0x`-prefixed hex of the viewed bytes.
    pub fn hex_string(&self) -> String {
        format!("0x{}", hex::encode(self.bytes))
    }

    fn checked_end(&self, offset: usize, len: usize) -> ViewResult<usize> {
        offset
            .checked_add(len)
            .filter(|end| *end <= self.bytes.len())
            .ok_or(ViewError::OutOfRange {
                offset,
                len,
                backing: self.bytes.len(),
            })
    }
}

/// Concatenate views into a freshly owned buffer.
pub fn concat(views: &[TypedView<'_>]) -> Vec<u8> {
    let total = views.iter().map(TypedView::len).sum();
    let mut out = Vec::with_capacity(total);
    for view in views {
        out.extend_from_slice(view.as_bytes());
    }
    out
}
