//! Origin engine configuration.

use crate::domain::{OriginError, OriginResult};
use serde::{Deserialize, Serialize};
use shared_types::DomainId;

/// Immutable settings fixed at construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginConfig {
    /// Domain this engine dispatches from.
    pub local_domain: DomainId,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self { local_domain: 1 }
    }
}

impl OriginConfig {
    /// Config for `local_domain`.
    pub fn new(local_domain: DomainId) -> Self {
        Self { local_domain }
    }

    /// Reject settings the engine cannot run with. Domain 0 means unset.
    pub fn validate(&self) -> OriginResult<()> {
        if self.local_domain == 0 {
            return Err(OriginError::InvalidConfig(
                "local_domain must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}
