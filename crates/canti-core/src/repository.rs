//! The canto repository.
//!
//! # Responsibility
//! - Load verses of a canto from `<directory>/Canto_<n>.txt`.
//! - Derive counts, lengths and searches from those verses.
//! - Persist word counts to `<directory>/words_count.json`.
//!
//! # Invariants
//! - Every query re-reads the file system; nothing is cached.
//! - Malformed or out-of-range canto identifiers are returned as errors.
//! - Missing or unreadable canto files degrade to an empty verse list in
//!   `load_verses`; `read_verses` surfaces them instead.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use canti_types::{CantoNumber, CantoSummary, HellSummary, LongestCanto, WordCounts};

use crate::canto::CantoArg;
use crate::error::{CantiError, ErrorCode, Result};
use crate::persist;
use crate::sanitize::sanitize_verse;
use crate::settings::{LoadOptions, RepositorySettings};

/// Read-only access to a directory of canto files.
#[derive(Debug, Clone)]
pub struct CantoRepository {
    directory: PathBuf,
    words_file: String,
}

impl CantoRepository {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self::from_settings(RepositorySettings::for_directory(directory))
    }

    pub fn from_settings(settings: RepositorySettings) -> Self {
        Self {
            directory: settings.directory,
            words_file: settings.words_file,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn canto_path(&self, canto: CantoNumber) -> PathBuf {
        self.directory.join(canto.file_name())
    }

    pub fn words_count_path(&self) -> PathBuf {
        self.directory.join(&self.words_file)
    }

    /// Read the verses of a canto, surfacing file errors.
    ///
    /// # Errors
    /// - `InvalidArgument` / `CantoNotFound` for a bad identifier.
    /// - `CantoFileMissing` when the file does not exist.
    /// - `IoError` for any other read or UTF-8 decoding failure.
    pub fn read_verses(&self, canto: impl CantoArg, opts: LoadOptions) -> Result<Vec<String>> {
        let canto = canto.to_canto()?;
        let path = self.canto_path(canto);
        let mut file = File::open(&path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => CantiError::file_missing(&path),
            _ => CantiError::io_error(&path, err),
        })?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|err| CantiError::io_error(&path, err))?;

        let limit = opts.limit.unwrap_or(usize::MAX);
        Ok(verse_lines(&text)
            .take(limit)
            .map(|line| {
                if opts.sanitize {
                    sanitize_verse(line).to_string()
                } else {
                    line.to_string()
                }
            })
            .collect())
    }

    /// Read the verses of a canto.
    ///
    /// A missing or unreadable file is logged and yields an empty list.
    ///
    /// # Errors
    /// - `InvalidArgument` / `CantoNotFound` for a bad identifier.
    pub fn load_verses(&self, canto: impl CantoArg, opts: LoadOptions) -> Result<Vec<String>> {
        match self.read_verses(canto, opts) {
            Ok(verses) => Ok(verses),
            Err(err) if err.code == ErrorCode::CantoFileMissing => {
                warn!(code = %err.code, "{}", err.message);
                Ok(Vec::new())
            }
            Err(err) if err.code == ErrorCode::IoError => {
                warn!(
                    code = %err.code,
                    details = err.details.as_deref().unwrap_or(""),
                    "{}",
                    err.message
                );
                Ok(Vec::new())
            }
            Err(err) => Err(err),
        }
    }

    fn verses(&self, canto: impl CantoArg) -> Result<Vec<String>> {
        self.load_verses(canto, LoadOptions::default())
    }

    pub fn count_verses(&self, canto: impl CantoArg) -> Result<usize> {
        Ok(self.verses(canto)?.len())
    }

    /// Full tercets only; one or two trailing verses are dropped.
    pub fn count_tercets(&self, canto: impl CantoArg) -> Result<usize> {
        Ok(self.count_verses(canto)? / 3)
    }

    /// Non-overlapping occurrences of `word` in the canto.
    ///
    /// Verses are joined with single spaces first, so a match may sit inside
    /// a longer word or straddle two verses.
    pub fn count_word(&self, canto: impl CantoArg, word: &str) -> Result<usize> {
        let text = self.verses(canto)?.join(" ");
        Ok(text.matches(word).count())
    }

    /// Count every word and persist the result as JSON.
    ///
    /// A write failure is logged; the counts are returned either way.
    pub fn count_words<S: AsRef<str>>(
        &self,
        canto: impl CantoArg,
        words: &[S],
    ) -> Result<WordCounts> {
        let canto = canto.to_canto()?;
        let mut counts = WordCounts::new();
        for word in words {
            let word = word.as_ref();
            counts.insert(word.to_string(), self.count_word(canto, word)?);
        }

        let path = self.words_count_path();
        match persist::write_word_counts(&path, &counts) {
            Ok(()) => info!(path = %path.display(), "Serialization done successfully"),
            Err(err) => warn!(code = %err.code, "{err}"),
        }
        Ok(counts)
    }

    /// Every verse of every canto, in corpus order.
    pub fn hell_verses(&self) -> Vec<String> {
        CantoNumber::all()
            .flat_map(|canto| self.verses(canto).unwrap_or_default())
            .collect()
    }

    pub fn count_hell_verses(&self) -> usize {
        self.hell_verses().len()
    }

    /// Mean sanitized verse length over the corpus, rounded to 2 decimals.
    ///
    /// Returns `None` when the corpus has no verses.
    pub fn hell_verse_mean_len(&self) -> Option<f64> {
        let verses = self.hell_verses();
        let total: usize = verses
            .iter()
            .map(|verse| sanitize_verse(verse).chars().count())
            .sum();
        let mean = canti_math::mean_len(total, verses.len());
        if mean.is_none() {
            warn!("No verses found, can't calculate mean length");
        }
        mean
    }

    /// The first canto with the most verses.
    pub fn longest_canto(&self) -> LongestCanto {
        let mut longest = LongestCanto::default();
        for canto in CantoNumber::all() {
            let len = self.verses(canto).map(|v| v.len()).unwrap_or_default();
            if len > longest.canto_len {
                longest = LongestCanto {
                    canto_number: canto.get(),
                    canto_len: len,
                };
            }
        }
        longest
    }

    /// The first verse with the most characters; empty when there are none.
    pub fn longest_verse(&self, canto: impl CantoArg) -> Result<String> {
        let mut longest = String::new();
        let mut longest_len = 0;
        for verse in self.verses(canto)? {
            let len = verse.chars().count();
            if len > longest_len {
                longest_len = len;
                longest = verse;
            }
        }
        Ok(longest)
    }

    pub fn verses_with_word(&self, canto: impl CantoArg, word: &str) -> Result<Vec<String>> {
        Ok(self
            .verses(canto)?
            .into_iter()
            .filter(|verse| verse.contains(word))
            .collect())
    }

    pub fn canto_summary(&self, canto: impl CantoArg) -> Result<CantoSummary> {
        let canto = canto.to_canto()?;
        let verses = self.count_verses(canto)?;
        Ok(CantoSummary {
            canto_number: canto,
            verses,
            tercets: verses / 3,
            longest_verse: self.longest_verse(canto)?,
        })
    }

    pub fn hell_summary(&self) -> HellSummary {
        HellSummary {
            verses: self.count_hell_verses(),
            mean_verse_len: self.hell_verse_mean_len(),
            longest_canto: self.longest_canto(),
        }
    }
}

/// Split on `\n`, `\r\n` and a lone `\r`; terminators are dropped.
fn verse_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\n', '\r']) {
            Some(i) => {
                let line = &rest[..i];
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_with(files: &[(u8, &str)]) -> (tempfile::TempDir, CantoRepository) {
        let dir = tempfile::tempdir().unwrap();
        for (n, content) in files {
            std::fs::write(dir.path().join(format!("Canto_{n}.txt")), content).unwrap();
        }
        let repo = CantoRepository::new(dir.path());
        (dir, repo)
    }

    #[test]
    fn lines_lose_their_terminators() {
        let (_dir, repo) = repo_with(&[(1, "primo\r\nsecondo\nterzo")]);
        let verses = repo.load_verses(1, LoadOptions::default()).unwrap();
        assert_eq!(verses, vec!["primo", "secondo", "terzo"]);
    }

    #[test]
    fn lone_carriage_returns_split_verses() {
        let (_dir, repo) = repo_with(&[(1, "primo\rsecondo\r\nterzo\r")]);
        let verses = repo.load_verses(1, LoadOptions::default()).unwrap();
        assert_eq!(verses, vec!["primo", "secondo", "terzo"]);
    }

    #[test]
    fn blank_lines_are_kept_as_empty_verses() {
        assert_eq!(verse_lines("a\n\nb\n").collect::<Vec<_>>(), vec!["a", "", "b"]);
        assert_eq!(verse_lines("").count(), 0);
        assert_eq!(verse_lines("\n").collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn limit_stops_early() {
        let (_dir, repo) = repo_with(&[(1, "a\nb\nc\n")]);
        let verses = repo.load_verses(1, LoadOptions::default().with_limit(2)).unwrap();
        assert_eq!(verses, vec!["a", "b"]);
        let none = repo.load_verses(1, LoadOptions::default().with_limit(0)).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn sanitize_applies_to_each_verse() {
        let (_dir, repo) = repo_with(&[(2, "«Lo giorno se n’andava»,\n")]);
        let verses = repo.load_verses(2, LoadOptions::sanitized()).unwrap();
        assert_eq!(verses, vec!["Lo giorno se n’andava"]);
    }

    #[test]
    fn invalid_utf8_degrades_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Canto_3.txt"), [0xffu8, 0xfe, b'\n']).unwrap();
        let repo = CantoRepository::new(dir.path());
        assert!(repo.load_verses(3, LoadOptions::default()).unwrap().is_empty());
        let err = repo.read_verses(3, LoadOptions::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::IoError);
    }

    #[test]
    fn count_word_is_substring_based() {
        let (_dir, repo) = repo_with(&[(1, "per me si va\nnella città dolente\n")]);
        assert_eq!(repo.count_word(1, "per").unwrap(), 1);
        assert_eq!(repo.count_word(1, "a").unwrap(), 2);
        // "va" + " " + "nella" spans the verse boundary.
        assert_eq!(repo.count_word(1, "va nella").unwrap(), 1);
    }

    #[test]
    fn count_word_with_empty_needle_counts_gaps() {
        let (_dir, repo) = repo_with(&[(1, "ab\n")]);
        assert_eq!(repo.count_word(1, "").unwrap(), 3);
    }
}
