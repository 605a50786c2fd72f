use anyhow::Result;
use canti_config as cli;
use canti_core::CantoRepository;

use crate::format;

pub(crate) fn handle(
    repo: &CantoRepository,
    args: cli::HellArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    if args.count {
        let count = repo.count_hell_verses();
        return format::print(output, "hell_count", None, count, usize::to_string);
    }
    let verses = repo.hell_verses();
    format::print(output, "hell", None, verses, format::render_lines)
}

pub(crate) fn handle_mean(repo: &CantoRepository, output: cli::OutputFormat) -> Result<()> {
    let mean = repo.hell_verse_mean_len();
    format::print(output, "mean", None, mean, format::render_mean)
}

pub(crate) fn handle_longest_canto(
    repo: &CantoRepository,
    output: cli::OutputFormat,
) -> Result<()> {
    let longest = repo.longest_canto();
    format::print(
        output,
        "longest_canto",
        None,
        longest,
        format::render_longest_canto,
    )
}
