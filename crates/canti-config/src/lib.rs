//! # canti-config
//!
//! **Tier 4 (Configuration)**
//!
//! This crate defines the CLI arguments and the `canti.toml` file structure.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Verse loading or statistics
//! * I/O operations (except config file parsing)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

pub use canti_types::OutputFormat;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "canti.toml";

/// Environment variable naming the canti directory.
pub const DIR_ENV: &str = "CANTI_DIR";

/// `canti`: verse statistics over the numbered canto files of a poem.
#[derive(Parser, Debug)]
#[command(name = "canti", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Directory containing `Canto_<n>.txt` files.
    #[arg(long, short = 'd', env = DIR_ENV, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Configuration file (defaults to `./canti.toml` if present).
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Named `[view.<name>]` profile from the configuration file.
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Output format.
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose diagnostics (repeat for more detail).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress diagnostics except errors.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the verses of a canto.
    Verses(VersesArgs),

    /// Count the verses of a canto.
    Count(CantoArgs),

    /// Count the full tercets of a canto.
    Tercets(CantoArgs),

    /// Count occurrences of a word in a canto.
    Word(WordArgs),

    /// Count several words in a canto and save them to `words_count.json`.
    Words(WordsArgs),

    /// Print (or count) every verse of the poem.
    Hell(HellArgs),

    /// Mean sanitized verse length over the whole poem.
    Mean,

    /// The canto with the most verses.
    LongestCanto,

    /// The longest verse of a canto.
    LongestVerse(CantoArgs),

    /// Verses of a canto containing a word.
    Search(WordArgs),

    /// Statistics for one canto, or for the whole poem.
    Summary(SummaryArgs),

    /// Generate shell completions.
    Completions(CompletionsArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CantoArgs {
    /// Canto number (1-34).
    #[arg(value_name = "CANTO", allow_negative_numbers = true)]
    pub canto: String,
}

#[derive(Args, Debug, Clone)]
pub struct VersesArgs {
    /// Canto number (1-34).
    #[arg(value_name = "CANTO", allow_negative_numbers = true)]
    pub canto: String,

    /// Strip punctuation, spaces and quotation marks from verse edges.
    #[arg(long)]
    pub sanitize: bool,

    /// Print at most N verses.
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct WordArgs {
    /// Canto number (1-34).
    #[arg(value_name = "CANTO", allow_negative_numbers = true)]
    pub canto: String,

    /// Word to look for (matched as a substring).
    pub word: String,
}

#[derive(Args, Debug, Clone)]
pub struct WordsArgs {
    /// Canto number (1-34).
    #[arg(value_name = "CANTO", allow_negative_numbers = true)]
    pub canto: String,

    /// Words to count.
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct HellArgs {
    /// Print only the number of verses.
    #[arg(long)]
    pub count: bool,
}

#[derive(Args, Debug, Clone, Default)]
pub struct SummaryArgs {
    /// Canto number (1-34); omit for the whole poem.
    #[arg(value_name = "CANTO", allow_negative_numbers = true)]
    pub canto: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Powershell,
    Zsh,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Where the canto files live.
    pub corpus: CorpusConfig,

    /// Output settings.
    pub output: OutputConfig,

    /// Named view profiles (e.g., [view.paradiso]).
    pub view: BTreeMap<String, ViewProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Directory holding `Canto_<n>.txt`. Relative paths resolve against the
    /// directory containing the configuration file.
    pub directory: Option<String>,

    /// File name for persisted word counts (default: `words_count.json`).
    pub words_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// "text" or "json".
    pub format: Option<String>,
}

/// A named override of the corpus and output sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewProfile {
    pub directory: Option<String>,
    pub words_file: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// Look up a view profile by name.
    pub fn profile(&self, name: &str) -> Option<&ViewProfile> {
        self.view.get(name)
    }
}

/// Parse an output format name as it appears in `canti.toml`.
pub fn parse_format(s: &str) -> Option<OutputFormat> {
    OutputFormat::from_str(s, true).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn empty_toml_is_default() {
        let config = TomlConfig::parse("").unwrap();
        assert!(config.corpus.directory.is_none());
        assert!(config.view.is_empty());
    }

    #[test]
    fn parse_format_is_case_insensitive() {
        assert_eq!(parse_format("JSON"), Some(OutputFormat::Json));
        assert_eq!(parse_format("text"), Some(OutputFormat::Text));
        assert_eq!(parse_format("yaml"), None);
    }
}
