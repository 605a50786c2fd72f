use anyhow::Result;
use canti_config as cli;
use canti_core::{CantoArg, CantoRepository};

use crate::format;

pub(crate) fn handle(
    repo: &CantoRepository,
    args: cli::SummaryArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    match args.canto {
        Some(canto) => {
            let canto = canto.to_canto()?;
            let summary = repo.canto_summary(canto)?;
            format::print(
                output,
                "summary",
                Some(canto),
                summary,
                format::render_canto_summary,
            )
        }
        None => {
            let summary = repo.hell_summary();
            format::print(output, "summary", None, summary, format::render_hell_summary)
        }
    }
}
