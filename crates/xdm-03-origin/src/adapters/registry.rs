//! In-memory Notary registry.
//!
//! Names a single Notary and records every slash request it receives.

use crate::ports::outbound::NotaryRegistry;
use parking_lot::RwLock;
use shared_types::Address;
use tracing::warn;

/// Registry that keeps slash requests in memory.
pub struct InMemoryNotaryRegistry {
    address: Address,
    notary: RwLock<Address>,
    slashes: RwLock<Vec<Address>>,
}

impl InMemoryNotaryRegistry {
    /// Registry at `address` naming `notary`.
    pub fn new(address: Address, notary: Address) -> Self {
        Self {
            address,
            notary: RwLock::new(notary),
            slashes: RwLock::new(Vec::new()),
        }
    }

    /// Change the Notary reported to future `initialize` calls.
    pub fn set_notary(&self, notary: Address) {
        *self.notary.write() = notary;
    }

    /// Reporters of every slash so far, oldest first.
    pub fn slash_reporters(&self) -> Vec<Address> {
        self.slashes.read().clone()
    }
}

impl NotaryRegistry for InMemoryNotaryRegistry {
    fn address(&self) -> Address {
        self.address
    }

    fn notary(&self) -> Address {
        *self.notary.read()
    }

    fn slash_notary(&self, reporter: Address) {
        warn!(
            registry = %hex::encode(self.address),
            reporter = %hex::encode(reporter),
            "Slashing notary"
        );
        self.slashes.write().push(reporter);
    }
}
