//! # Origin State
//!
//! The single aggregate every operation reads and writes. Owned by the
//! service and only mutated after all checks of an operation have passed.

use shared_types::{Address, Hash, ZERO_ADDRESS};
use xdm_02_merkle::IncrementalMerkleTree;

use super::events::OriginEvent;
use super::member_set::MemberSet;
use super::value_objects::EngineState;

/// Mutable engine state.
#[derive(Clone, Debug, Default)]
pub struct OriginState {
    /// Leaf accumulator.
    pub tree: IncrementalMerkleTree,
    /// `H[n]` is the root after the n-th message; `H[0]` is the empty root.
    pub historical_roots: Vec<Hash>,
    /// Last assigned nonce.
    pub nonce: u32,
    /// Lifecycle state.
    pub engine_state: EngineState,
    /// Whether `initialize` ran.
    pub initialized: bool,
    /// Owner, zero when renounced or before initialization.
    pub owner: Address,
    /// Notary registry contract.
    pub notary_manager: Address,
    /// System messenger slot.
    pub system_messenger: Address,
    /// Authorized Notaries for this domain.
    pub notaries: MemberSet,
    /// Guards.
    pub guards: MemberSet,
    /// Events of the operation in flight.
    pub pending_events: Vec<OriginEvent>,
}

impl OriginState {
    /// Fresh, uninitialized state.
    pub fn new() -> Self {
        Self {
            owner: ZERO_ADDRESS,
            ..Self::default()
        }
    }

    /// Queue an event for publication once the operation commits.
    pub fn emit(&mut self, event: OriginEvent) {
        self.pending_events.push(event);
    }

    /// Take all queued events.
    pub fn take_events(&mut self) -> Vec<OriginEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Add a Notary, queueing `NotaryAdded` on change.
    pub fn add_notary(&mut self, notary: Address) -> bool {
        let added = self.notaries.add(notary);
        if added {
            self.emit(OriginEvent::NotaryAdded { notary });
        }
        added
    }

    /// Remove a Notary, queueing `NotaryRemoved` on change.
    pub fn remove_notary(&mut self, notary: &Address) -> bool {
        let removed = self.notaries.remove(notary);
        if removed {
            self.emit(OriginEvent::NotaryRemoved { notary: *notary });
        }
        removed
    }

    /// Add a Guard, queueing `GuardAdded` on change.
    pub fn add_guard(&mut self, guard: Address) -> bool {
        let added = self.guards.add(guard);
        if added {
            self.emit(OriginEvent::GuardAdded { guard });
        }
        added
    }

    /// Remove a Guard, queueing `GuardRemoved` on change.
    pub fn remove_guard(&mut self, guard: &Address) -> bool {
        let removed = self.guards.remove(guard);
        if removed {
            self.emit(OriginEvent::GuardRemoved { guard: *guard });
        }
        removed
    }

    /// Replace the owner, queueing `OwnershipTransferred`.
    pub fn set_owner(&mut self, new_owner: Address) {
        let previous_owner = self.owner;
        self.owner = new_owner;
        self.emit(OriginEvent::OwnershipTransferred {
            previous_owner,
            new_owner,
        });
    }
}
