//! Shared engine setup for integration and exploit tests.

use std::sync::Arc;

use shared_crypto::Secp256k1KeyPair;
use shared_types::{Address, Hash, U256};
use xdm_01_message_codec::{Attestation, AttestationData, Tips};
use xdm_03_origin::{
    DispatchRequest, InMemoryEventLog, InMemoryNotaryRegistry, OriginApi, OriginConfig,
    OriginService, Sender, StaticHost,
};

/// Domain every fixture engine serves.
pub const LOCAL_DOMAIN: u32 = 10;
/// Destination used by fixture dispatches.
pub const DESTINATION: u32 = 20;
/// Owner and initializer.
pub const OWNER: Address = [0xA0; 20];
/// Registry contract address.
pub const REGISTRY: Address = [0xB0; 20];
/// Caller that reports fraud.
pub const REPORTER: Address = [0xC0; 20];

/// Engine wired to in-memory adapters.
pub type TestOrigin = OriginService<StaticHost, InMemoryEventLog>;

/// An initialized engine and handles to its adapters.
pub struct Harness {
    /// Engine under test
    pub origin: TestOrigin,
    /// Every committed event
    pub events: Arc<InMemoryEventLog>,
    /// Registry the engine was initialized with
    pub registry: Arc<InMemoryNotaryRegistry>,
    /// Host contract table
    pub host: Arc<StaticHost>,
    /// Key of the initial Notary
    pub notary: Secp256k1KeyPair,
}

/// Deterministic key from a one-byte seed.
pub fn key(seed: u8) -> Secp256k1KeyPair {
    let mut secret = [0u8; 32];
    secret[31] = seed;
    Secp256k1KeyPair::from_bytes(secret).expect("valid scalar")
}

/// Engine created but not yet initialized.
pub fn uninitialized() -> (TestOrigin, Arc<InMemoryEventLog>, Arc<StaticHost>) {
    let host = Arc::new(StaticHost::with_contracts([REGISTRY]));
    let events = Arc::new(InMemoryEventLog::new());
    let origin = OriginService::new(OriginConfig::new(LOCAL_DOMAIN), host.clone(), events.clone())
        .expect("valid config");
    (origin, events, host)
}

/// Engine initialized with Notary `key(1)`; init events are drained.
pub fn harness() -> Harness {
    let notary = key(1);
    let (mut origin, events, host) = uninitialized();
    let registry = Arc::new(InMemoryNotaryRegistry::new(REGISTRY, notary.address()));
    origin
        .initialize(OWNER, registry.clone())
        .expect("initialize");
    events.drain();
    Harness {
        origin,
        events,
        registry,
        host,
        notary,
    }
}

/// All-zero tips blob.
pub fn zero_tips() -> Vec<u8> {
    vec![0u8; xdm_01_message_codec::TIPS_LENGTH]
}

/// Dispatch request from an external caller, paying nothing.
pub fn request(caller: Address, body: &[u8]) -> DispatchRequest {
    DispatchRequest {
        sender: Sender::External(shared_types::address_to_bytes32(&caller)),
        destination: DESTINATION,
        recipient: shared_types::address_to_bytes32(&[0x02; 20]),
        optimistic_seconds: 0,
        tips: zero_tips(),
        body: body.to_vec(),
        amount_paid: U256::zero(),
    }
}

/// Request carrying paid tips.
pub fn paid_request(caller: Address, tips: Tips) -> DispatchRequest {
    DispatchRequest {
        tips: tips.encode().expect("tips fit"),
        amount_paid: tips.total(),
        ..request(caller, b"paid")
    }
}

/// Signed attestation bytes.
pub fn attest(signer: &Secp256k1KeyPair, origin: u32, nonce: u32, root: Hash) -> Vec<u8> {
    Attestation::sign(AttestationData { origin, nonce, root }, signer)
        .expect("sign")
        .encode()
}

/// Flip the lowest bit of a root.
pub fn corrupt(root: Hash) -> Hash {
    let mut out = root;
    out[31] ^= 1;
    out
}
