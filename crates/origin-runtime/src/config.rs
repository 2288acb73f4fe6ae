//! Runtime configuration from environment variables.

use shared_types::{parse_fixed_hex, Address, DomainId};
use std::env;
use tracing::warn;
use xdm_03_origin::OriginConfig;

/// Default registry address: `0x00..0100`.
const DEFAULT_REGISTRY: Address = {
    let mut a = [0u8; 20];
    a[18] = 0x01;
    a
};

/// Default owner address: `0x00..01`.
const DEFAULT_OWNER: Address = {
    let mut a = [0u8; 20];
    a[19] = 0x01;
    a
};

/// Settings for the origin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Domain served by the engine
    pub local_domain: DomainId,

    /// Log filter (trace, debug, info, warn, error or a full directive)
    pub log_level: String,

    /// Emit JSON logs instead of the human-readable format
    pub json_logs: bool,

    /// Caller that runs `initialize` and becomes owner
    pub owner: Address,

    /// Address of the in-memory Notary registry
    pub registry: Address,

    /// Notary the registry names at initialization
    pub notary: Address,

    /// Extra addresses the host treats as contracts
    pub contracts: Vec<Address>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            local_domain: OriginConfig::default().local_domain,
            log_level: "info".to_string(),
            json_logs: false,
            owner: DEFAULT_OWNER,
            registry: DEFAULT_REGISTRY,
            notary: [0u8; 20],
            contracts: Vec::new(),
        }
    }
}

impl RuntimeConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `XDM_LOCAL_DOMAIN`: Local domain id (default: 1)
    /// - `XDM_LOG_LEVEL` or `RUST_LOG`: Log filter (default: info)
    /// - `XDM_JSON_LOGS`: JSON log output (default: false)
    /// - `XDM_OWNER`: Owner address (default: 0x00..01)
    /// - `XDM_REGISTRY`: Registry address (default: 0x00..0100)
    /// - `XDM_NOTARY`: Initial Notary address (default: zero)
    /// - `XDM_CONTRACTS`: Comma-separated extra contract addresses
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            local_domain: env::var("XDM_LOCAL_DOMAIN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.local_domain),

            log_level: env::var("XDM_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: env::var("XDM_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            owner: address_var("XDM_OWNER").unwrap_or(defaults.owner),
            registry: address_var("XDM_REGISTRY").unwrap_or(defaults.registry),
            notary: address_var("XDM_NOTARY").unwrap_or(defaults.notary),

            contracts: env::var("XDM_CONTRACTS")
                .map(|v| parse_address_list(&v))
                .unwrap_or_default(),
        }
    }

    /// Engine configuration derived from these settings.
    pub fn origin_config(&self) -> OriginConfig {
        OriginConfig::new(self.local_domain)
    }
}

fn address_var(name: &str) -> Option<Address> {
    let value = env::var(name).ok()?;
    match parse_fixed_hex::<20>(&value) {
        Ok(address) => Some(address),
        Err(e) => {
            warn!(var = name, error = %e, "Ignoring malformed address");
            None
        }
    }
}

/// Parse `0x..,0x..`; malformed entries are skipped with a warning.
pub fn parse_address_list(value: &str) -> Vec<Address> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| match parse_fixed_hex::<20>(s) {
            Ok(address) => Some(address),
            Err(e) => {
                warn!(entry = s, error = %e, "Ignoring malformed contract address");
                None
            }
        })
        .collect()
}
