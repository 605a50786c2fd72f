//! Rendering of command results as plain text or JSON receipts.

use anyhow::Result;
use serde::Serialize;

use canti_config::OutputFormat;
use canti_types::{CantoNumber, CantoSummary, HellSummary, LongestCanto, Receipt, WordCounts};

pub(crate) fn print<T: Serialize>(
    format: OutputFormat,
    mode: &str,
    canto: Option<CantoNumber>,
    result: T,
    text: impl FnOnce(&T) -> String,
) -> Result<()> {
    let receipt = Receipt::new(mode, canto, result);
    print!("{}", render(format, &receipt, text)?);
    Ok(())
}

pub(crate) fn render<T: Serialize>(
    format: OutputFormat,
    receipt: &Receipt<T>,
    text: impl FnOnce(&T) -> String,
) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = text(&receipt.result);
            if !out.is_empty() && !out.ends_with('\n') {
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string(receipt)?)),
    }
}

#[allow(clippy::ptr_arg)]
pub(crate) fn render_lines(lines: &Vec<String>) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

pub(crate) fn render_mean(mean: &Option<f64>) -> String {
    match mean {
        Some(mean) => mean.to_string(),
        None => "none".to_string(),
    }
}

pub(crate) fn render_longest_canto(longest: &LongestCanto) -> String {
    format!("Canto {}: {} verses", longest.canto_number, longest.canto_len)
}

pub(crate) fn render_word_counts(counts: &WordCounts) -> String {
    let mut out = String::new();
    for (word, count) in counts {
        out.push_str(&format!("{word}\t{count}\n"));
    }
    out
}

pub(crate) fn render_canto_summary(summary: &CantoSummary) -> String {
    format!(
        "canto\t{}\nverses\t{}\ntercets\t{}\nlongest_verse\t{}\n",
        summary.canto_number, summary.verses, summary.tercets, summary.longest_verse
    )
}

pub(crate) fn render_hell_summary(summary: &HellSummary) -> String {
    format!(
        "verses\t{}\nmean_verse_len\t{}\nlongest_canto\t{}\n",
        summary.verses,
        render_mean(&summary.mean_verse_len),
        render_longest_canto(&summary.longest_canto)
    )
}
