//! # Outbound Ports
//!
//! Collaborators the engine calls but does not own.

use shared_types::Address;
use std::sync::Arc;

use crate::domain::OriginEvent;

/// Notary registry ("notary manager") contract.
pub trait NotaryRegistry: Send + Sync {
    /// Address the registry is deployed at.
    fn address(&self) -> Address;

    /// Notary to adopt at initialization.
    fn notary(&self) -> Address;

    /// Called once fraud is proven. Must not fail.
    fn slash_notary(&self, reporter: Address);
}

/// Host chain facts the engine cannot derive itself.
pub trait HostEnvironment: Send + Sync {
    /// Whether `address` has deployed code.
    fn is_contract(&self, address: &Address) -> bool;
}

/// Destination for committed events.
pub trait EventSink: Send + Sync {
    /// Deliver one event.
    fn publish(&self, event: &OriginEvent);
}

impl<T: EventSink + ?Sized> EventSink for Arc<T> {
    fn publish(&self, event: &OriginEvent) {
        (**self).publish(event)
    }
}

impl<T: HostEnvironment + ?Sized> HostEnvironment for Arc<T> {
    fn is_contract(&self, address: &Address) -> bool {
        (**self).is_contract(address)
    }
}
