//! Shared test utilities for canti integration tests.
//!
//! Every test gets its own copy of the fixture corpus, because `words`
//! writes into the canto directory.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(dst)?;
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let from = entry.path();
        let to = dst.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir_recursive(&from, &to)?;
        } else {
            std::fs::copy(&from, &to)?;
        }
    }
    Ok(())
}

/// A private working directory holding `inferno/Canto_{1,2,3}.txt`.
pub struct Fixture {
    pub root: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let src = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("data");
        let root = tempfile::tempdir().expect("create temp dir");
        copy_dir_recursive(&src, root.path()).expect("copy test fixtures");
        Self { root }
    }

    pub fn inferno(&self) -> PathBuf {
        self.root.path().join("inferno")
    }

    /// `canti` running inside the fixture with a clean environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_canti"));
        cmd.current_dir(self.root.path())
            .env_remove("CANTI_DIR")
            .env_remove("CANTI_LOG");
        cmd
    }

    /// Like [`Fixture::cmd`], pointed at the fixture corpus.
    pub fn canti(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--dir").arg(self.inferno());
        cmd
    }
}
