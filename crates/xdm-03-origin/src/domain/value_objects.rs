//! # Value Objects
//!
//! Requests, receipts and small enums passed across the engine boundary.

use serde::{Deserialize, Serialize};
use shared_types::{address_to_bytes32, Address, Bytes32, DomainId, Hash, U256};

/// Envelope format version reported by the engine.
pub const VERSION: u8 = 0;

/// Version emitted in the `Initialized` event.
pub const INITIALIZED_VERSION: u8 = 1;

/// Engine lifecycle state. `Failed` is absorbing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// Dispatch and attestation checks are accepted.
    #[default]
    Active,
    /// A Notary was proven to have signed a wrong root.
    Failed,
}

impl EngineState {
    /// Whether write paths are open.
    pub fn is_active(&self) -> bool {
        matches!(self, EngineState::Active)
    }
}

/// Sender identity as resolved by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum Sender {
    /// A contract on this domain; left-padded to 32 bytes.
    Contract(Address),
    /// Any other caller, already wrapped as 32 bytes.
    External(Bytes32),
}

impl Sender {
    /// 32-byte identity written into the header.
    pub fn to_bytes32(&self) -> Bytes32 {
        match self {
            Sender::Contract(address) => address_to_bytes32(address),
            Sender::External(bytes) => *bytes,
        }
    }
}

/// Arguments of a dispatch call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRequest {
    /// Resolved sender.
    pub sender: Sender,
    /// Target domain.
    pub destination: DomainId,
    /// Recipient on the target domain.
    pub recipient: Bytes32,
    /// Optimistic period in seconds.
    pub optimistic_seconds: u32,
    /// Raw tips blob.
    #[serde(with = "hex::serde")]
    pub tips: Vec<u8>,
    /// Opaque body.
    #[serde(with = "hex::serde")]
    pub body: Vec<u8>,
    /// Value attached to the call; must equal the tips total.
    pub amount_paid: U256,
}

/// Outcome of a successful dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchReceipt {
    /// Assigned nonce.
    pub nonce: u32,
    /// Leaf appended to the tree.
    pub leaf: Hash,
    /// Index of the leaf.
    pub leaf_index: u64,
    /// Root after the append.
    pub root: Hash,
}

/// The `(nonce, root)` pair Notaries are expected to sign.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationSuggestion {
    /// Current nonce.
    pub nonce: u32,
    /// Current root.
    pub root: Hash,
}

/// How a signed `(nonce, root)` compares with local history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttestationStatus {
    /// Nonce not reached yet; nothing to compare.
    Future,
    /// Root equals the recorded one.
    Valid,
    /// Root differs from the recorded one.
    Fraudulent,
}

/// Read-only result of checking an attestation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttestationVerdict {
    /// Recovered signer.
    pub notary: Address,
    /// Attested nonce.
    pub nonce: u32,
    /// Attested root.
    pub root: Hash,
    /// Comparison against history.
    pub status: AttestationStatus,
}
