//! Static host environment.

use crate::ports::outbound::HostEnvironment;
use parking_lot::RwLock;
use shared_types::Address;
use std::collections::HashSet;

/// Host whose set of deployed contracts is registered up front.
#[derive(Default)]
pub struct StaticHost {
    contracts: RwLock<HashSet<Address>>,
}

impl StaticHost {
    /// Host with no contracts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Host with the given contracts deployed.
    pub fn with_contracts(contracts: impl IntoIterator<Item = Address>) -> Self {
        Self {
            contracts: RwLock::new(contracts.into_iter().collect()),
        }
    }

    /// Mark `address` as having code.
    pub fn deploy(&self, address: Address) {
        self.contracts.write().insert(address);
    }
}

impl HostEnvironment for StaticHost {
    fn is_contract(&self, address: &Address) -> bool {
        self.contracts.read().contains(address)
    }
}
