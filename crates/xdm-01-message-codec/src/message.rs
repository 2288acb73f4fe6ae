//! # Message Envelope
//!
//! `header || tips || body`, concatenated without separators. The keccak-256
//! of the envelope is the Merkle leaf.

use crate::errors::{CodecError, CodecResult};
use crate::header::{Header, HeaderView, HEADER_LENGTH};
use crate::tips::TipsView;
use crate::view::{concat, TypedView, ViewType};
use serde::{Deserialize, Serialize};
use shared_crypto::keccak256;
use shared_types::{DomainId, Hash};

/// Maximum body length accepted by dispatch.
pub const MAX_MESSAGE_BODY_BYTES: usize = 2 * 1024;

/// Concatenate header, tips and body into an envelope.
pub fn frame(header: &[u8], tips: &[u8], body: &[u8]) -> Vec<u8> {
    concat(&[
        TypedView::new(header, ViewType::Header),
        TypedView::new(tips, ViewType::Tips),
        TypedView::new(body, ViewType::Body),
    ])
}

/// Pack destination and nonce into the indexed event topic.
pub fn destination_and_nonce(destination: DomainId, nonce: u32) -> u64 {
    (u64::from(destination) << 32) | u64::from(nonce)
}

/// Owned message envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Decoded header.
    pub header: Header,
    /// Raw tips blob, echoed as given.
    #[serde(with = "hex::serde")]
    pub tips: Vec<u8>,
    /// Opaque body.
    #[serde(with = "hex::serde")]
    pub body: Vec<u8>,
}

impl Message {
    /// Encoded envelope bytes.
    pub fn encode(&self) -> Vec<u8> {
        frame(&self.header.encode(), &self.tips, &self.body)
    }

    /// keccak-256 of the envelope.
    pub fn leaf(&self) -> Hash {
        keccak256(&self.encode())
    }
}

/// Envelope split into header, tips and body views.
#[derive(Clone, Copy, Debug)]
pub struct MessageView<'a> {
    view: TypedView<'a>,
    tips_len: usize,
}

impl<'a> MessageView<'a> {
    /// Split `bytes` given the tips length, which the envelope does not encode.
    pub fn parse(bytes: &'a [u8], tips_len: usize) -> CodecResult<Self> {
        let min = HEADER_LENGTH.saturating_add(tips_len);
        if bytes.len() < min {
            return Err(CodecError::MalformedMessage {
                len: bytes.len(),
                min,
            });
        }
        let parsed = Self {
            view: TypedView::new(bytes, ViewType::Message),
            tips_len,
        };
        // Reject a tips region that cannot hold the four amounts.
        parsed.tips()?;
        Ok(parsed)
    }

    /// Underlying envelope view.
    pub fn view(&self) -> TypedView<'a> {
        self.view
    }

    /// Header accessors.
    pub fn header(&self) -> CodecResult<HeaderView<'a>> {
        HeaderView::from_view(self.view.slice(0, HEADER_LENGTH, ViewType::Header)?)
    }

    /// Tips accessors.
    pub fn tips(&self) -> CodecResult<TipsView<'a>> {
        TipsView::from_view(self.view.slice(HEADER_LENGTH, self.tips_len, ViewType::Tips)?)
    }

    /// Body bytes.
    pub fn body(&self) -> CodecResult<TypedView<'a>> {
        let offset = HEADER_LENGTH + self.tips_len;
        Ok(self
            .view
            .slice(offset, self.view.len() - offset, ViewType::Body)?)
    }

    /// keccak-256 of the whole envelope.
    pub fn leaf(&self) -> Hash {
        self.view.keccak()
    }

    /// Decode into an owned [`Message`].
    pub fn to_message(&self) -> CodecResult<Message> {
        Ok(Message {
            header: self.header()?.to_header()?,
            tips: self.tips()?.view().to_vec(),
            body: self.body()?.to_vec(),
        })
    }
}
