use anyhow::Result;
use canti_config as cli;
use canti_core::{CantoArg, CantoRepository};

use crate::format;

pub(crate) fn handle_verses(
    repo: &CantoRepository,
    args: cli::CantoArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    let canto = args.canto.to_canto()?;
    let count = repo.count_verses(canto)?;
    format::print(output, "count", Some(canto), count, usize::to_string)
}

pub(crate) fn handle_tercets(
    repo: &CantoRepository,
    args: cli::CantoArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    let canto = args.canto.to_canto()?;
    let tercets = repo.count_tercets(canto)?;
    format::print(output, "tercets", Some(canto), tercets, usize::to_string)
}
