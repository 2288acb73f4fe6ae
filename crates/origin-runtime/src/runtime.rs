//! Engine wiring and command handling.

use std::sync::Arc;

use anyhow::{Context, Result};
use parking_lot::Mutex;
use serde_json::{json, Value};
use shared_types::{address_to_bytes32, parse_fixed_hex, parse_hex, to_hex, Address};
use tracing::info;
use xdm_03_origin::{
    DispatchRequest, EventSink, FanoutEventSink, HostEnvironment, InMemoryEventLog,
    InMemoryNotaryRegistry, OriginApi, OriginService, Sender, StaticHost, TracingEventSink,
};

use crate::config::RuntimeConfig;
use crate::protocol::Command;

type Engine = OriginService<StaticHost, FanoutEventSink>;

/// Initialized engine plus the adapters behind it.
pub struct OriginRuntime {
    engine: Mutex<Engine>,
    host: Arc<StaticHost>,
    log: Arc<InMemoryEventLog>,
    registry: Arc<InMemoryNotaryRegistry>,
}

impl OriginRuntime {
    /// Build and initialize the engine.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        let mut contracts = config.contracts.clone();
        contracts.push(config.registry);
        let host = Arc::new(StaticHost::with_contracts(contracts));

        let log = Arc::new(InMemoryEventLog::new());
        let sink: Arc<dyn EventSink> = log.clone();
        let events = Arc::new(
            FanoutEventSink::new()
                .with(sink)
                .with(Arc::new(TracingEventSink)),
        );

        let registry = Arc::new(InMemoryNotaryRegistry::new(config.registry, config.notary));

        let mut engine = OriginService::new(config.origin_config(), host.clone(), events)
            .context("failed to create origin")?;
        engine
            .initialize(config.owner, registry.clone())
            .context("failed to initialize origin")?;

        info!(
            domain = config.local_domain,
            notary = %to_hex(&config.notary),
            "Origin runtime ready"
        );

        Ok(Self {
            engine: Mutex::new(engine),
            host,
            log,
            registry,
        })
    }

    /// Events published so far.
    pub fn event_log(&self) -> &Arc<InMemoryEventLog> {
        &self.log
    }

    /// The registry the engine was initialized with.
    pub fn registry(&self) -> &Arc<InMemoryNotaryRegistry> {
        &self.registry
    }

    /// Execute one command.
    pub fn handle(&self, command: Command) -> Result<Value> {
        match command {
            Command::Dispatch {
                caller,
                destination,
                recipient,
                optimistic_seconds,
                tips,
                body,
                amount_paid,
            } => {
                let caller: Address = parse_fixed_hex(&caller).context("invalid caller")?;
                let request = DispatchRequest {
                    sender: self.resolve_sender(caller),
                    destination,
                    recipient: parse_fixed_hex(&recipient).context("invalid recipient")?,
                    optimistic_seconds,
                    tips: parse_hex(&tips).context("invalid tips")?,
                    body: parse_hex(&body).context("invalid body")?,
                    amount_paid,
                };
                let receipt = self.engine.lock().dispatch(request).context("dispatch failed")?;
                Ok(json!({
                    "nonce": receipt.nonce,
                    "leaf": to_hex(&receipt.leaf),
                    "leaf_index": receipt.leaf_index,
                    "root": to_hex(&receipt.root),
                }))
            }

            Command::Suggest => {
                let suggestion = self.engine.lock().suggest_attestation();
                Ok(json!({
                    "nonce": suggestion.nonce,
                    "root": to_hex(&suggestion.root),
                }))
            }

            Command::ImproperAttestation {
                caller,
                attestation,
            } => {
                let caller: Address = parse_fixed_hex(&caller).context("invalid caller")?;
                let bytes = parse_hex(&attestation).context("invalid attestation")?;
                let fraud = self
                    .engine
                    .lock()
                    .improper_attestation(caller, &bytes)
                    .context("attestation rejected")?;
                Ok(json!({ "fraud": fraud }))
            }

            Command::CheckAttestation { attestation } => {
                let bytes = parse_hex(&attestation).context("invalid attestation")?;
                let verdict = self
                    .engine
                    .lock()
                    .check_attestation(&bytes)
                    .context("attestation rejected")?;
                Ok(json!({
                    "notary": to_hex(&verdict.notary),
                    "nonce": verdict.nonce,
                    "root": to_hex(&verdict.root),
                    "status": format!("{:?}", verdict.status),
                }))
            }

            Command::State => {
                let engine = self.engine.lock();
                let notaries: Vec<String> =
                    engine.all_notaries().iter().map(|a| to_hex(a)).collect();
                let guards: Vec<String> = engine.all_guards().iter().map(|a| to_hex(a)).collect();
                Ok(json!({
                    "local_domain": engine.local_domain(),
                    "state": format!("{:?}", engine.state()),
                    "nonce": engine.nonce(),
                    "count": engine.count(),
                    "root": to_hex(&engine.root()),
                    "owner": to_hex(&engine.owner()),
                    "notary_manager": to_hex(&engine.notary_manager()),
                    "notaries": notaries,
                    "guards": guards,
                }))
            }
        }
    }

    fn resolve_sender(&self, caller: Address) -> Sender {
        if self.host.is_contract(&caller) {
            Sender::Contract(caller)
        } else {
            Sender::External(address_to_bytes32(&caller))
        }
    }
}
