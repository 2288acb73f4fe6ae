//! Event sinks: an in-memory log, a tracing logger and a fan-out.

use crate::domain::OriginEvent;
use crate::ports::outbound::EventSink;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::info;

/// Keeps every published event in order.
#[derive(Default)]
pub struct InMemoryEventLog {
    events: RwLock<Vec<OriginEvent>>,
}

impl InMemoryEventLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all events.
    pub fn events(&self) -> Vec<OriginEvent> {
        self.events.read().clone()
    }

    /// Remove and return all events.
    pub fn drain(&self) -> Vec<OriginEvent> {
        std::mem::take(&mut *self.events.write())
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Whether nothing was published.
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }
}

impl EventSink for InMemoryEventLog {
    fn publish(&self, event: &OriginEvent) {
        self.events.write().push(event.clone());
    }
}

/// Logs each event at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEventSink;

impl EventSink for TracingEventSink {
    fn publish(&self, event: &OriginEvent) {
        match event {
            OriginEvent::Dispatch {
                leaf_hash,
                leaf_index,
                destination_and_nonce,
                message,
                ..
            } => info!(
                event = event.name(),
                leaf = %hex::encode(leaf_hash),
                leaf_index,
                destination = destination_and_nonce >> 32,
                nonce = destination_and_nonce & 0xFFFF_FFFF,
                size = message.len(),
                "Origin event"
            ),
            other => info!(event = other.name(), detail = ?other, "Origin event"),
        }
    }
}

/// Publishes to several sinks in order.
#[derive(Default)]
pub struct FanoutEventSink {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl FanoutEventSink {
    /// Empty fan-out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sink.
    pub fn with(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl EventSink for FanoutEventSink {
    fn publish(&self, event: &OriginEvent) {
        for sink in &self.sinks {
            sink.publish(event);
        }
    }
}
