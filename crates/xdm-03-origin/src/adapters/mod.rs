//! # Adapters Layer
//!
//! In-memory implementations of the outbound ports, used by the runtime shim
//! and by tests.

mod event_log;
mod host;
mod registry;

pub use event_log::{FanoutEventSink, InMemoryEventLog, TracingEventSink};
pub use host::StaticHost;
pub use registry::InMemoryNotaryRegistry;
