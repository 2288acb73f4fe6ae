//! # JSON-Lines Protocol
//!
//! One command object per input line, one response object per output line.
//! Byte strings are hex, with or without `0x`.
//!
//! ```text
//! {"cmd":"dispatch","caller":"0x..20","destination":20,"recipient":"0x..32",
//!  "optimistic_seconds":0,"tips":"0x..","body":"0x","amount_paid":"0x0"}
//! {"cmd":"suggest"}
//! {"cmd":"improper_attestation","caller":"0x..20","attestation":"0x..105"}
//! {"cmd":"check_attestation","attestation":"0x..105"}
//! {"cmd":"state"}
//! ```

use serde::{Deserialize, Serialize};
use shared_types::{DomainId, U256};

/// A single request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum Command {
    /// Dispatch a message from `caller`.
    Dispatch {
        /// 20-byte caller address
        caller: String,
        /// Target domain
        destination: DomainId,
        /// 32-byte recipient
        recipient: String,
        /// Optimistic period
        #[serde(default)]
        optimistic_seconds: u32,
        /// Tips blob
        tips: String,
        /// Body
        #[serde(default)]
        body: String,
        /// Attached value
        #[serde(default)]
        amount_paid: U256,
    },

    /// Current `(nonce, root)`.
    Suggest,

    /// Submit an attestation as `caller`.
    ImproperAttestation {
        /// 20-byte reporter address
        caller: String,
        /// 105-byte attestation
        attestation: String,
    },

    /// Check an attestation without side effects.
    CheckAttestation {
        /// 105-byte attestation
        attestation: String,
    },

    /// Engine summary.
    State,
}

/// A single reply.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Whether the command succeeded
    pub ok: bool,
    /// Command result on success
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub result: Option<serde_json::Value>,
    /// Error chain on failure
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl Response {
    /// Successful reply.
    pub fn success(result: serde_json::Value) -> Self {
        Self {
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// Failed reply.
    pub fn failure(error: &anyhow::Error) -> Self {
        Self {
            ok: false,
            result: None,
            error: Some(format!("{error:#}")),
        }
    }
}
