//! # Inbound Ports
//!
//! What the origin engine can do. Writes take `&mut self` and are atomic;
//! reads never fail.

use shared_types::{Address, DomainId, Hash};
use std::sync::Arc;
use xdm_02_merkle::IncrementalMerkleTree;

use crate::domain::{
    AttestationSuggestion, AttestationVerdict, DispatchReceipt, DispatchRequest, EngineState,
    OriginResult,
};
use crate::ports::outbound::NotaryRegistry;

/// Origin engine API - inbound port.
pub trait OriginApi {
    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// One-time setup: owner, registry, first Notary and `H[0]`.
    fn initialize(&mut self, caller: Address, registry: Arc<dyn NotaryRegistry>)
        -> OriginResult<()>;

    /// Replace the registry. Owner only; must be a contract.
    fn set_notary_manager(
        &mut self,
        caller: Address,
        registry: Arc<dyn NotaryRegistry>,
    ) -> OriginResult<()>;

    /// Admit a Notary. Registry only. Returns false if already listed.
    fn set_notary(&mut self, caller: Address, notary: Address) -> OriginResult<bool>;

    /// Set the system messenger slot. Owner only; non-zero.
    fn set_system_messenger(&mut self, caller: Address, messenger: Address) -> OriginResult<()>;

    /// Hand ownership to `new_owner`. Owner only; non-zero.
    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> OriginResult<()>;

    /// Drop ownership for good. Owner only.
    fn renounce_ownership(&mut self, caller: Address) -> OriginResult<()>;

    /// Admit a Guard. Owner only. Returns false if already listed.
    fn add_guard(&mut self, caller: Address, guard: Address) -> OriginResult<bool>;

    /// Remove a Guard. Owner only. Returns false if absent.
    fn remove_guard(&mut self, caller: Address, guard: Address) -> OriginResult<bool>;

    // -------------------------------------------------------------------------
    // Pipelines
    // -------------------------------------------------------------------------

    /// Accept an outbound message.
    fn dispatch(&mut self, request: DispatchRequest) -> OriginResult<DispatchReceipt>;

    /// Submit a signed attestation; `Ok(true)` when it proves fraud.
    fn improper_attestation(&mut self, caller: Address, attestation: &[u8]) -> OriginResult<bool>;

    /// Verdict on an attestation without side effects.
    fn check_attestation(&self, attestation: &[u8]) -> OriginResult<AttestationVerdict>;

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    /// Domain this engine serves.
    fn local_domain(&self) -> DomainId;
    /// Last assigned nonce.
    fn nonce(&self) -> u32;
    /// Leaf count.
    fn count(&self) -> u64;
    /// Current root.
    fn root(&self) -> Hash;
    /// Tree snapshot.
    fn tree(&self) -> IncrementalMerkleTree;
    /// `H[index]`.
    fn historical_root(&self, index: usize) -> Option<Hash>;
    /// Current `(nonce, root)`.
    fn suggest_attestation(&self) -> AttestationSuggestion;
    /// Lifecycle state.
    fn state(&self) -> EngineState;
    /// Owner; zero if none.
    fn owner(&self) -> Address;
    /// Registry address; zero before initialization.
    fn notary_manager(&self) -> Address;
    /// System messenger; zero if unset.
    fn system_messenger(&self) -> Address;
    /// Notary at `index`.
    fn notary_at(&self, index: usize) -> Option<Address>;
    /// All Notaries.
    fn all_notaries(&self) -> Vec<Address>;
    /// Number of Notaries.
    fn notaries_amount(&self) -> usize;
    /// Guard at `index`.
    fn guard_at(&self, index: usize) -> Option<Address>;
    /// All Guards.
    fn all_guards(&self) -> Vec<Address>;
    /// Number of Guards.
    fn guards_amount(&self) -> usize;
}
