//! Pure settings for constructing a repository.
//!
//! These mirror the `[corpus]` section of `canti.toml` without any Clap or
//! TOML dependency, so library consumers can build them directly.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use canti_types::WORDS_COUNT_FILE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySettings {
    /// Directory holding `Canto_<n>.txt` files.
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// File name, relative to `directory`, for persisted word counts.
    #[serde(default = "default_words_file")]
    pub words_file: String,
}

impl Default for RepositorySettings {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            words_file: default_words_file(),
        }
    }
}

impl RepositorySettings {
    pub fn for_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            ..Default::default()
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from(".")
}

fn default_words_file() -> String {
    WORDS_COUNT_FILE.to_string()
}

/// Options for a single verse load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Strip excluded characters from both ends of each verse.
    #[serde(default)]
    pub sanitize: bool,

    /// Stop after this many verses.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl LoadOptions {
    pub fn sanitized() -> Self {
        Self {
            sanitize: true,
            limit: None,
        }
    }

    pub fn with_limit(self, limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..self
        }
    }
}
