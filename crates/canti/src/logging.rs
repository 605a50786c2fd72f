//! Diagnostics bootstrap.
//!
//! Diagnostics are plain lines on stderr so that stdout carries only command
//! output. `CANTI_LOG` takes an `EnvFilter` directive and wins over `-v`/`-q`.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CANTI_LOG";

pub(crate) fn level(verbose: u8, quiet: bool) -> &'static str {
    match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "info",
        (false, 1) => "debug",
        (false, _) => "trace",
    }
}

/// Install the global subscriber. Repeated calls are ignored.
pub(crate) fn init(verbose: u8, quiet: bool) {
    let level = level(verbose, quiet);
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(format!("canti={level},canti_core={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
