//! Origin Service - core business logic
//!
//! Owns the single [`OriginState`] aggregate. Each write runs in three
//! phases: every check, then every mutation, then publication of the events
//! queued by the mutations. A failed check therefore leaves no trace.

use std::sync::Arc;

use shared_types::{is_zero_address, Address, DomainId, Hash, ZERO_ADDRESS};
use tracing::{debug, info, warn};
use xdm_02_merkle::{IncrementalMerkleTree, MerkleError, MAX_LEAVES};

use crate::algorithms::{compare_with_history, prepare_message, recover_attestation};
use crate::config::OriginConfig;
use crate::domain::{
    invariant_history_tracks_tree, invariant_nonce_matches_count, AttestationStatus,
    AttestationSuggestion, AttestationVerdict, DispatchReceipt, DispatchRequest, EngineState,
    OriginError, OriginEvent, OriginResult, OriginState, INITIALIZED_VERSION,
};
use crate::ports::inbound::OriginApi;
use crate::ports::outbound::{EventSink, HostEnvironment, NotaryRegistry};

/// Origin engine.
pub struct OriginService<H, E>
where
    H: HostEnvironment,
    E: EventSink,
{
    config: OriginConfig,
    state: OriginState,
    registry: Option<Arc<dyn NotaryRegistry>>,
    host: Arc<H>,
    events: Arc<E>,
}

impl<H, E> OriginService<H, E>
where
    H: HostEnvironment,
    E: EventSink,
{
    /// Create an uninitialized engine bound to `config.local_domain`.
    pub fn new(config: OriginConfig, host: Arc<H>, events: Arc<E>) -> OriginResult<Self> {
        config.validate()?;
        info!(domain = config.local_domain, "Origin created");
        Ok(Self {
            config,
            state: OriginState::new(),
            registry: None,
            host,
            events,
        })
    }

    /// Engine configuration.
    pub fn config(&self) -> &OriginConfig {
        &self.config
    }

    /// Read-only view of the aggregate.
    pub fn origin_state(&self) -> &OriginState {
        &self.state
    }

    /// Event sink the engine publishes to.
    pub fn event_sink(&self) -> &Arc<E> {
        &self.events
    }

    /// Whether `address` is a listed Notary.
    pub fn is_notary(&self, address: &Address) -> bool {
        self.state.notaries.contains(address)
    }

    /// Whether `address` is a listed Guard.
    pub fn is_guard(&self, address: &Address) -> bool {
        self.state.guards.contains(address)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    fn ensure_initialized(&self) -> OriginResult<()> {
        if !self.state.initialized {
            return Err(OriginError::NotInitialized);
        }
        Ok(())
    }

    fn ensure_active(&self) -> OriginResult<()> {
        self.ensure_initialized()?;
        if !self.state.engine_state.is_active() {
            return Err(OriginError::NotActive);
        }
        Ok(())
    }

    fn only_owner(&self, caller: &Address) -> OriginResult<()> {
        self.ensure_initialized()?;
        if is_zero_address(&self.state.owner) || *caller != self.state.owner {
            return Err(OriginError::NotOwner);
        }
        Ok(())
    }

    fn ensure_contract(&self, address: &Address) -> OriginResult<()> {
        if !self.host.is_contract(address) {
            return Err(OriginError::NotAContract(*address));
        }
        Ok(())
    }

    fn ensure_non_zero(address: &Address) -> OriginResult<()> {
        if is_zero_address(address) {
            return Err(OriginError::ZeroAddress);
        }
        Ok(())
    }

    /// Publish queued events. Called only after a write fully succeeded.
    fn commit(&mut self) {
        debug_assert!(invariant_history_tracks_tree(&self.state));
        debug_assert!(invariant_nonce_matches_count(&self.state));
        for event in self.state.take_events() {
            self.events.publish(&event);
        }
    }

    fn verdict(&self, attestation: &[u8]) -> OriginResult<AttestationVerdict> {
        let signed = recover_attestation(attestation, self.config.local_domain)?;
        if !self.state.notaries.contains(&signed.signer) {
            warn!(
                signer = %hex::encode(signed.signer),
                nonce = signed.data.nonce,
                "Attestation signer is not a notary"
            );
            return Err(OriginError::NotANotary(signed.signer));
        }
        let status = compare_with_history(
            &self.state.historical_roots,
            signed.data.nonce,
            &signed.data.root,
        );
        Ok(AttestationVerdict {
            notary: signed.signer,
            nonce: signed.data.nonce,
            root: signed.data.root,
            status,
        })
    }
}

impl<H, E> OriginApi for OriginService<H, E>
where
    H: HostEnvironment,
    E: EventSink,
{
    fn initialize(
        &mut self,
        caller: Address,
        registry: Arc<dyn NotaryRegistry>,
    ) -> OriginResult<()> {
        if self.state.initialized {
            return Err(OriginError::AlreadyInitialized);
        }
        let registry_address = registry.address();
        self.ensure_contract(&registry_address)?;
        let notary = registry.notary();

        self.state.initialized = true;
        self.state.set_owner(caller);
        self.state.notary_manager = registry_address;
        self.state.emit(OriginEvent::NewNotaryManager {
            notary_manager: registry_address,
        });
        if !is_zero_address(&notary) {
            self.state.add_notary(notary);
        }
        self.state.historical_roots.push(self.state.tree.root());
        self.state.emit(OriginEvent::Initialized {
            version: INITIALIZED_VERSION,
        });
        self.registry = Some(registry);
        self.commit();

        info!(
            domain = self.config.local_domain,
            owner = %hex::encode(caller),
            notary_manager = %hex::encode(registry_address),
            notary = %hex::encode(notary),
            "Origin initialized"
        );
        Ok(())
    }

    fn set_notary_manager(
        &mut self,
        caller: Address,
        registry: Arc<dyn NotaryRegistry>,
    ) -> OriginResult<()> {
        self.only_owner(&caller)?;
        let registry_address = registry.address();
        self.ensure_contract(&registry_address)?;

        self.state.notary_manager = registry_address;
        self.state.emit(OriginEvent::NewNotaryManager {
            notary_manager: registry_address,
        });
        self.registry = Some(registry);
        self.commit();

        info!(notary_manager = %hex::encode(registry_address), "Notary manager updated");
        Ok(())
    }

    fn set_notary(&mut self, caller: Address, notary: Address) -> OriginResult<bool> {
        self.ensure_initialized()?;
        if caller != self.state.notary_manager {
            return Err(OriginError::NotNotaryManager);
        }
        Self::ensure_non_zero(&notary)?;

        let added = self.state.add_notary(notary);
        self.commit();

        if added {
            info!(notary = %hex::encode(notary), "Notary added");
        }
        Ok(added)
    }

    fn set_system_messenger(&mut self, caller: Address, messenger: Address) -> OriginResult<()> {
        self.only_owner(&caller)?;
        Self::ensure_non_zero(&messenger)?;

        self.state.system_messenger = messenger;
        self.state.emit(OriginEvent::NewSystemMessenger {
            system_messenger: messenger,
        });
        self.commit();

        info!(system_messenger = %hex::encode(messenger), "System messenger updated");
        Ok(())
    }

    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> OriginResult<()> {
        self.only_owner(&caller)?;
        Self::ensure_non_zero(&new_owner)?;

        self.state.set_owner(new_owner);
        self.commit();

        info!(
            previous_owner = %hex::encode(caller),
            new_owner = %hex::encode(new_owner),
            "Ownership transferred"
        );
        Ok(())
    }

    fn renounce_ownership(&mut self, caller: Address) -> OriginResult<()> {
        self.only_owner(&caller)?;

        self.state.set_owner(ZERO_ADDRESS);
        self.commit();

        info!(previous_owner = %hex::encode(caller), "Ownership renounced");
        Ok(())
    }

    fn add_guard(&mut self, caller: Address, guard: Address) -> OriginResult<bool> {
        self.only_owner(&caller)?;
        Self::ensure_non_zero(&guard)?;

        let added = self.state.add_guard(guard);
        self.commit();
        Ok(added)
    }

    fn remove_guard(&mut self, caller: Address, guard: Address) -> OriginResult<bool> {
        self.only_owner(&caller)?;

        let removed = self.state.remove_guard(&guard);
        self.commit();
        Ok(removed)
    }

    fn dispatch(&mut self, request: DispatchRequest) -> OriginResult<DispatchReceipt> {
        self.ensure_active()?;

        let count = self.state.tree.count();
        if count + 1 >= MAX_LEAVES {
            return Err(MerkleError::TreeFull { count }.into());
        }
        let nonce = self
            .state
            .nonce
            .checked_add(1)
            .ok_or(MerkleError::TreeFull { count })?;
        let prepared = prepare_message(self.config.local_domain, nonce, &request)?;

        self.state.tree.insert(prepared.leaf)?;
        self.state.nonce = nonce;
        let root = self.state.tree.root();
        self.state.historical_roots.push(root);
        let leaf_index = self.state.tree.count() - 1;
        debug!(
            leaf = %hex::encode(prepared.leaf),
            leaf_index,
            root = %hex::encode(root),
            "Leaf inserted"
        );

        self.state.emit(OriginEvent::Dispatch {
            leaf_hash: prepared.leaf,
            leaf_index,
            destination_and_nonce: xdm_01_message_codec::destination_and_nonce(
                request.destination,
                nonce,
            ),
            tips: request.tips,
            message: prepared.envelope,
        });
        self.commit();

        info!(
            domain = self.config.local_domain,
            destination = request.destination,
            nonce,
            leaf = %hex::encode(prepared.leaf),
            "Message dispatched"
        );
        Ok(DispatchReceipt {
            nonce,
            leaf: prepared.leaf,
            leaf_index,
            root,
        })
    }

    fn improper_attestation(&mut self, caller: Address, attestation: &[u8]) -> OriginResult<bool> {
        self.ensure_active()?;
        let verdict = self.verdict(attestation)?;

        match verdict.status {
            AttestationStatus::Future => {
                debug!(nonce = verdict.nonce, "Attestation is ahead of local history");
                return Ok(false);
            }
            AttestationStatus::Valid => {
                debug!(nonce = verdict.nonce, "Attestation matches local history");
                return Ok(false);
            }
            AttestationStatus::Fraudulent => {}
        }

        let registry = self.registry.clone().ok_or(OriginError::NotInitialized)?;

        self.state.emit(OriginEvent::ImproperAttestation {
            notary: verdict.notary,
            attestation: attestation.to_vec(),
        });
        self.state.remove_notary(&verdict.notary);
        registry.slash_notary(caller);
        self.state.emit(OriginEvent::NotarySlashed {
            notary: verdict.notary,
            reporter: caller,
        });
        self.state.engine_state = EngineState::Failed;
        self.commit();

        warn!(
            notary = %hex::encode(verdict.notary),
            reporter = %hex::encode(caller),
            nonce = verdict.nonce,
            attested_root = %hex::encode(verdict.root),
            "Improper attestation: origin failed"
        );
        Ok(true)
    }

    fn check_attestation(&self, attestation: &[u8]) -> OriginResult<AttestationVerdict> {
        self.verdict(attestation)
    }

    fn local_domain(&self) -> DomainId {
        self.config.local_domain
    }

    fn nonce(&self) -> u32 {
        self.state.nonce
    }

    fn count(&self) -> u64 {
        self.state.tree.count()
    }

    fn root(&self) -> Hash {
        self.state.tree.root()
    }

    fn tree(&self) -> IncrementalMerkleTree {
        self.state.tree.clone()
    }

    fn historical_root(&self, index: usize) -> Option<Hash> {
        self.state.historical_roots.get(index).copied()
    }

    fn suggest_attestation(&self) -> AttestationSuggestion {
        AttestationSuggestion {
            nonce: self.state.nonce,
            root: self.state.tree.root(),
        }
    }

    fn state(&self) -> EngineState {
        self.state.engine_state
    }

    fn owner(&self) -> Address {
        self.state.owner
    }

    fn notary_manager(&self) -> Address {
        self.state.notary_manager
    }

    fn system_messenger(&self) -> Address {
        self.state.system_messenger
    }

    fn notary_at(&self, index: usize) -> Option<Address> {
        self.state.notaries.at(index)
    }

    fn all_notaries(&self) -> Vec<Address> {
        self.state.notaries.values().to_vec()
    }

    fn notaries_amount(&self) -> usize {
        self.state.notaries.len()
    }

    fn guard_at(&self, index: usize) -> Option<Address> {
        self.state.guards.at(index)
    }

    fn all_guards(&self) -> Vec<Address> {
        self.state.guards.values().to_vec()
    }

    fn guards_amount(&self) -> usize {
        self.state.guards.len()
    }
}
