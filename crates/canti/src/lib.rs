//! # canti
//!
//! **CLI Binary**
//!
//! This is the entry point for the `canti` command-line application.
//! It orchestrates the other crates to perform the requested actions.
//!
//! ## Responsibilities
//! * Parse command line arguments
//! * Load configuration
//! * Dispatch commands to appropriate handlers
//! * Handle errors and exit codes
//!
//! This crate should contain minimal business logic.

mod commands;
mod config;
mod error_hints;
mod format;
mod logging;

use anyhow::Result;
use clap::Parser;

use canti_config::Cli;

pub use config::{LoadedConfig, ResolvedConfig, resolve};

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose, cli.global.quiet);

    let loaded = config::load_config(&cli.global)?;
    let resolved = config::resolve(&cli.global, loaded.as_ref())?;
    tracing::debug!(
        directory = %resolved.repository.directory.display(),
        format = ?resolved.format,
        source = ?resolved.source,
        "resolved configuration"
    );

    commands::dispatch(cli.command, &resolved)
}

pub fn format_error(err: &anyhow::Error) -> String {
    error_hints::format(err)
}
