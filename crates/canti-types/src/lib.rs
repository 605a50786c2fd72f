//! # canti-types
//!
//! **Tier 0 (Core Types)**
//!
//! This crate defines the data structures shared by the `canti` crates.
//! It contains only data types, Serde definitions, and `SCHEMA_VERSION`.
//!
//! ## What belongs here
//! * Canto identifiers and corpus constants
//! * Result structs (longest canto, summaries, word counts)
//! * The JSON receipt envelope
//!
//! ## What does NOT belong here
//! * File I/O
//! * CLI argument parsing
//! * Error reporting (see `canti-core`)

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The current schema version for all receipt types.
pub const SCHEMA_VERSION: u32 = 1;

/// Number of cantos in the corpus.
pub const CANTI_QUANTITY: u8 = 34;

/// Default file name for the persisted word counts.
pub const WORDS_COUNT_FILE: &str = "words_count.json";

/// Word to occurrence count. A `BTreeMap` keeps keys sorted on output.
pub type WordCounts = BTreeMap<String, usize>;

/// A canto index, guaranteed to lie in `1..=CANTI_QUANTITY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct CantoNumber(u8);

impl CantoNumber {
    pub const FIRST: CantoNumber = CantoNumber(1);
    pub const LAST: CantoNumber = CantoNumber(CANTI_QUANTITY);

    /// Returns `None` when `n` is outside `1..=CANTI_QUANTITY`.
    #[must_use]
    pub fn new(n: i64) -> Option<Self> {
        if (1..=i64::from(CANTI_QUANTITY)).contains(&n) {
            Some(Self(n as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// File name backing this canto, e.g. `Canto_7.txt`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("Canto_{}.txt", self.0)
    }

    /// Every canto of the corpus, in order.
    pub fn all() -> impl Iterator<Item = CantoNumber> {
        (1..=CANTI_QUANTITY).map(CantoNumber)
    }
}

impl fmt::Display for CantoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<CantoNumber> for u8 {
    fn from(n: CantoNumber) -> Self {
        n.0
    }
}

impl TryFrom<i64> for CantoNumber {
    type Error = String;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        CantoNumber::new(n)
            .ok_or_else(|| format!("canto_number must be between 1 and {CANTI_QUANTITY}"))
    }
}

/// The canto with the most verses.
///
/// `canto_number == 0` means no canto had any verse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongestCanto {
    pub canto_number: u8,
    pub canto_len: usize,
}

/// Per-canto statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantoSummary {
    pub canto_number: CantoNumber,
    pub verses: usize,
    pub tercets: usize,
    pub longest_verse: String,
}

/// Whole-corpus statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HellSummary {
    pub verses: usize,
    pub mean_verse_len: Option<f64>,
    pub longest_canto: LongestCanto,
}

/// Output format for the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Plain text, one value or verse per line.
    #[default]
    Text,
    /// A JSON receipt.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

impl ToolInfo {
    pub fn current() -> Self {
        Self {
            name: "canti".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// JSON envelope wrapping every command result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt<T> {
    pub schema_version: u32,
    pub tool: ToolInfo,
    pub mode: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canto: Option<CantoNumber>,
    pub result: T,
}

impl<T> Receipt<T> {
    pub fn new(mode: impl Into<String>, canto: Option<CantoNumber>, result: T) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            tool: ToolInfo::current(),
            mode: mode.into(),
            canto,
            result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canto_number_bounds() {
        assert!(CantoNumber::new(0).is_none());
        assert!(CantoNumber::new(35).is_none());
        assert!(CantoNumber::new(-1).is_none());
        assert_eq!(CantoNumber::new(1), Some(CantoNumber::FIRST));
        assert_eq!(CantoNumber::new(34), Some(CantoNumber::LAST));
    }

    #[test]
    fn file_name_follows_convention() {
        let n = CantoNumber::new(12).unwrap();
        assert_eq!(n.file_name(), "Canto_12.txt");
    }

    #[test]
    fn all_yields_every_canto_in_order() {
        let all: Vec<u8> = CantoNumber::all().map(CantoNumber::get).collect();
        assert_eq!(all.len(), 34);
        assert_eq!(all.first(), Some(&1));
        assert_eq!(all.last(), Some(&34));
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn canto_number_serializes_as_integer() {
        let n = CantoNumber::new(5).unwrap();
        assert_eq!(serde_json::to_string(&n).unwrap(), "5");
        let back: CantoNumber = serde_json::from_str("5").unwrap();
        assert_eq!(back, n);
        assert!(serde_json::from_str::<CantoNumber>("35").is_err());
    }

    #[test]
    fn receipt_omits_missing_canto() {
        let receipt = Receipt::new("mean", None, 31.5);
        let json = serde_json::to_string(&receipt).unwrap();
        assert!(!json.contains("\"canto\""));
        assert!(json.contains("\"mode\":\"mean\""));
        assert!(json.contains("\"schema_version\":1"));
    }
}
