//! # Dispatch Algorithm
//!
//! Validates a dispatch request and builds its envelope and leaf. Pure: the
//! caller decides whether to commit the result.

use shared_crypto::keccak256;
use shared_types::{DomainId, Hash};
use xdm_01_message_codec::{frame, total_tips, Header, MESSAGE_VERSION};

use crate::domain::{
    invariant_body_length, invariant_tips_cover_payment, DispatchRequest, OriginResult,
};

/// Envelope ready to be appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedMessage {
    /// Header fields written into the envelope.
    pub header: Header,
    /// `header || tips || body`.
    pub envelope: Vec<u8>,
    /// keccak-256 of the envelope.
    pub leaf: Hash,
}

/// Check body length and tips, then frame the message under `nonce`.
pub fn prepare_message(
    local_domain: DomainId,
    nonce: u32,
    request: &DispatchRequest,
) -> OriginResult<PreparedMessage> {
    invariant_body_length(&request.body)?;
    invariant_tips_cover_payment(total_tips(&request.tips)?, request.amount_paid)?;

    let header = Header {
        version: MESSAGE_VERSION,
        origin: local_domain,
        sender: request.sender.to_bytes32(),
        nonce,
        destination: request.destination,
        recipient: request.recipient,
        optimistic_seconds: request.optimistic_seconds,
    };
    let envelope = frame(&header.encode(), &request.tips, &request.body);
    let leaf = keccak256(&envelope);

    Ok(PreparedMessage {
        header,
        envelope,
        leaf,
    })
}
