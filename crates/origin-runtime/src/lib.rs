//! # Origin Runtime
//!
//! Host shim around the origin engine. The engine is built once from
//! environment configuration, initialized against an in-memory Notary
//! registry and then driven by JSON-lines commands.
//!
//! ```text
//! stdin ──Command──→ OriginRuntime ──→ OriginService ──events──→ log + tracing
//!                          │
//! stdout ←──Response───────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod logging;
pub mod protocol;
pub mod runtime;

// Re-exports
pub use config::RuntimeConfig;
pub use logging::init_logging;
pub use protocol::{Command, Response};
pub use runtime::OriginRuntime;

/// Parse and execute one protocol line.
pub fn handle_line(runtime: &OriginRuntime, line: &str) -> Response {
    let command = match serde_json::from_str::<Command>(line) {
        Ok(command) => command,
        Err(e) => return Response::failure(&anyhow::Error::new(e).context("malformed command")),
    };
    match runtime.handle(command) {
        Ok(result) => Response::success(result),
        Err(e) => Response::failure(&e),
    }
}
