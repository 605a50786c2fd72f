use anyhow::Result;
use canti_config as cli;
use canti_core::{CantoArg, CantoRepository};

use crate::format;

pub(crate) fn handle_count(
    repo: &CantoRepository,
    args: cli::WordArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    let canto = args.canto.to_canto()?;
    let count = repo.count_word(canto, &args.word)?;
    format::print(output, "word", Some(canto), count, usize::to_string)
}

/// Counts are written to the words file before anything is printed.
pub(crate) fn handle_count_many(
    repo: &CantoRepository,
    args: cli::WordsArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    let canto = args.canto.to_canto()?;
    let counts = repo.count_words(canto, args.words.as_slice())?;
    format::print(
        output,
        "words",
        Some(canto),
        counts,
        format::render_word_counts,
    )
}

pub(crate) fn handle_search(
    repo: &CantoRepository,
    args: cli::WordArgs,
    output: cli::OutputFormat,
) -> Result<()> {
    let canto = args.canto.to_canto()?;
    let verses = repo.verses_with_word(canto, &args.word)?;
    format::print(output, "search", Some(canto), verses, format::render_lines)
}
