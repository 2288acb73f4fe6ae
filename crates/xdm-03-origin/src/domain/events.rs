//! # Origin Events
//!
//! Emitted through the [`crate::ports::EventSink`] port after an operation
//! commits. Byte fields serialize as bare lowercase hex.

use serde::{Deserialize, Serialize};
use shared_types::{Address, Hash};

/// Everything the engine reports to the outside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum OriginEvent {
    /// A message was accepted and appended.
    Dispatch {
        /// keccak-256 of the envelope
        #[serde(with = "hex::serde")]
        leaf_hash: Hash,
        /// Position of the leaf in the tree
        leaf_index: u64,
        /// `(destination << 32) | nonce`
        destination_and_nonce: u64,
        /// Tips as given
        #[serde(with = "hex::serde")]
        tips: Vec<u8>,
        /// Full envelope
        #[serde(with = "hex::serde")]
        message: Vec<u8>,
    },

    /// Notary admitted.
    NotaryAdded {
        /// Notary address
        #[serde(with = "hex::serde")]
        notary: Address,
    },

    /// Notary removed.
    NotaryRemoved {
        /// Notary address
        #[serde(with = "hex::serde")]
        notary: Address,
    },

    /// Guard admitted.
    GuardAdded {
        /// Guard address
        #[serde(with = "hex::serde")]
        guard: Address,
    },

    /// Guard removed.
    GuardRemoved {
        /// Guard address
        #[serde(with = "hex::serde")]
        guard: Address,
    },

    /// A Notary signed a root that disagrees with history.
    ImproperAttestation {
        /// Signer
        #[serde(with = "hex::serde")]
        notary: Address,
        /// The 105 attestation bytes
        #[serde(with = "hex::serde")]
        attestation: Vec<u8>,
    },

    /// The registry was told to slash a Notary.
    NotarySlashed {
        /// Slashed Notary
        #[serde(with = "hex::serde")]
        notary: Address,
        /// Caller that submitted the proof
        #[serde(with = "hex::serde")]
        reporter: Address,
    },

    /// Notary registry pointer changed.
    NewNotaryManager {
        /// Registry address
        #[serde(with = "hex::serde")]
        notary_manager: Address,
    },

    /// System messenger slot changed.
    NewSystemMessenger {
        /// Messenger address
        #[serde(with = "hex::serde")]
        system_messenger: Address,
    },

    /// One-time initialization finished.
    Initialized {
        /// Initializer version
        version: u8,
    },

    /// Owner changed. Zero means none.
    OwnershipTransferred {
        /// Previous owner
        #[serde(with = "hex::serde")]
        previous_owner: Address,
        /// New owner
        #[serde(with = "hex::serde")]
        new_owner: Address,
    },
}

impl OriginEvent {
    /// Event name, as used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            OriginEvent::Dispatch { .. } => "Dispatch",
            OriginEvent::NotaryAdded { .. } => "NotaryAdded",
            OriginEvent::NotaryRemoved { .. } => "NotaryRemoved",
            OriginEvent::GuardAdded { .. } => "GuardAdded",
            OriginEvent::GuardRemoved { .. } => "GuardRemoved",
            OriginEvent::ImproperAttestation { .. } => "ImproperAttestation",
            OriginEvent::NotarySlashed { .. } => "NotarySlashed",
            OriginEvent::NewNotaryManager { .. } => "NewNotaryManager",
            OriginEvent::NewSystemMessenger { .. } => "NewSystemMessenger",
            OriginEvent::Initialized { .. } => "Initialized",
            OriginEvent::OwnershipTransferred { .. } => "OwnershipTransferred",
        }
    }
}
