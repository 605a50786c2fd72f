use anyhow::Result;
use canti_config as cli;
use canti_core::{CantoArg, CantoRepository, LoadOptions};

use crate::format;

pub(crate) fn handle(
    repo: &CantoRepository,
    args: cli::VersesArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    let canto = args.canto.to_canto()?;
    let opts = LoadOptions {
        sanitize: args.sanitize,
        limit: args.limit,
    };
    let verses = repo.load_verses(canto, opts)?;
    format::print(output, "verses", Some(canto), verses, format::render_lines)
}

pub(crate) fn handle_longest(
    repo: &CantoRepository,
    args: cli::CantoArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    let canto = args.canto.to_canto()?;
    let verse = repo.longest_verse(canto)?;
    format::print(output, "longest_verse", Some(canto), verse, String::clone)
}
