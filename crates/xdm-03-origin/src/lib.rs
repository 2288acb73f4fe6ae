//! # XDM-03 Origin
//!
//! Origin side of the cross-domain messaging protocol. Applications dispatch
//! messages; each gets the next nonce and its envelope hash is appended to a
//! depth-32 Merkle tree. The root after every append is kept in `H`, so any
//! Notary attestation `(nonce, root)` can be checked against history. A
//! signed root that disagrees with `H[nonce]` is proof of fraud: the Notary
//! is removed and slashed and the origin enters the terminal Failed state.
//!
//! ## Lifecycle
//!
//! ```text
//! new(domain) ──initialize(registry)──→ Active ──improper_attestation──→ Failed
//!                                         │  ↑                           (absorbing)
//!                                         └──┘ dispatch / owner setters
//! ```
//!
//! ## Domain Invariants
//!
//! | Invariant | Check |
//! |-----------|-------|
//! | History tracks tree | `len(H) = count + 1`, `H[count] = root` |
//! | Nonce matches count | `nonce = count` |
//! | Failed is absorbing | no transition out of Failed |
//! | Tips cover payment | `total_tips(tips) = amount_paid` |
//!
//! ## Module Structure
//!
//! ```text
//! xdm-03-origin/
//! ├── domain/      # OriginState, MemberSet, OriginEvent, OriginError
//! ├── algorithms/  # prepare_message, recover_attestation
//! ├── ports/       # OriginApi, NotaryRegistry, HostEnvironment, EventSink
//! ├── adapters/    # in-memory registry, host and event sinks
//! ├── config       # OriginConfig
//! └── service      # OriginService
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{
    FanoutEventSink, InMemoryEventLog, InMemoryNotaryRegistry, StaticHost, TracingEventSink,
};
pub use algorithms::{compare_with_history, prepare_message, recover_attestation};
pub use config::OriginConfig;
pub use domain::{
    AttestationStatus, AttestationSuggestion, AttestationVerdict, DispatchReceipt,
    DispatchRequest, EngineState, MemberSet, OriginError, OriginEvent, OriginResult, OriginState,
    Sender, INITIALIZED_VERSION, VERSION,
};
pub use ports::{EventSink, HostEnvironment, NotaryRegistry, OriginApi};
pub use service::OriginService;
pub use xdm_01_message_codec::MAX_MESSAGE_BODY_BYTES;

/// Crate version
pub const CRATE_VERSION: &str = env!("CARGO_PKG_VERSION");
