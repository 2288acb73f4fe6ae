//! Origin runtime entry point.
//!
//! Reads one JSON command per line from stdin and writes one JSON response
//! per line to stdout until EOF.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use origin_runtime::{handle_line, init_logging, OriginRuntime, RuntimeConfig};
use tracing::{debug, info};

fn main() -> Result<()> {
    let config = RuntimeConfig::from_env();
    init_logging(&config)?;

    info!("===========================================");
    info!("  Origin Runtime v{}", env!("CARGO_PKG_VERSION"));
    info!("===========================================");

    let runtime = OriginRuntime::new(&config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    let mut handled = 0u64;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = handle_line(&runtime, line);
        debug!(ok = response.ok, "Command handled");
        serde_json::to_writer(&mut stdout, &response).context("failed to encode response")?;
        stdout.write_all(b"\n").context("failed to write stdout")?;
        stdout.flush().context("failed to flush stdout")?;
        handled += 1;
    }

    info!(
        commands = handled,
        events = runtime.event_log().len(),
        "Input closed, shutting down"
    );
    Ok(())
}
