//! Word-count persistence.
//!
//! The summary file is a JSON object with 4-space indentation. Keys come out
//! sorted because `WordCounts` is a `BTreeMap`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use canti_types::WordCounts;

use crate::error::{CantiError, Result};

const INDENT: &[u8] = b"    ";

/// Render word counts exactly as they are written to disk.
pub fn render_word_counts(counts: &WordCounts) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    counts
        .serialize(&mut ser)
        .map_err(|err| CantiError::persistence(Path::new("<memory>"), err))?;
    String::from_utf8(buf).map_err(|err| CantiError::persistence(Path::new("<memory>"), err))
}

/// Write word counts to `path`, overwriting any existing file.
pub fn write_word_counts(path: &Path, counts: &WordCounts) -> Result<()> {
    let file = File::create(path).map_err(|err| CantiError::persistence(path, err))?;
    let mut writer = BufWriter::new(file);
    {
        let mut ser =
            Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
        counts
            .serialize(&mut ser)
            .map_err(|err| CantiError::persistence(path, err))?;
    }
    writer
        .flush()
        .map_err(|err| CantiError::persistence(path, err))
}

/// Read a previously written word-count file.
pub fn read_word_counts(path: &Path) -> Result<WordCounts> {
    let file = File::open(path).map_err(|err| CantiError::io_error(path, err))?;
    serde_json::from_reader(BufReader::new(file)).map_err(|err| CantiError::io_error(path, err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_four_space_indent_sorted() {
        let mut counts = WordCounts::new();
        counts.insert("lupa".to_string(), 1);
        counts.insert("luce".to_string(), 3);
        let rendered = render_word_counts(&counts).unwrap();
        assert_eq!(rendered, "{\n    \"luce\": 3,\n    \"lupa\": 1\n}");
    }

    #[test]
    fn empty_counts_render_as_empty_object() {
        assert_eq!(render_word_counts(&WordCounts::new()).unwrap(), "{}");
    }

    #[test]
    fn write_then_read_preserves_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words_count.json");
        let mut counts = WordCounts::new();
        counts.insert("selva".to_string(), 2);

        write_word_counts(&path, &counts).unwrap();
        assert_eq!(read_word_counts(&path).unwrap(), counts);
    }

    #[test]
    fn write_into_missing_directory_is_persistence_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("words_count.json");
        let err = write_word_counts(&path, &WordCounts::new()).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::PersistenceFailure);
    }
}
