//! # canti-core
//!
//! This crate is the **primary library interface** for `canti`.
//! It reads the numbered canto files of a poem and derives verse statistics.
//!
//! ## Example
//!
//! ```rust,no_run
//! use canti_core::{CantoRepository, LoadOptions};
//!
//! let repo = CantoRepository::new("/data/inferno");
//! let verses = repo.load_verses(1, LoadOptions::sanitized().with_limit(3))?;
//! println!("{} verses, {} tercets", repo.count_verses(1)?, repo.count_tercets(1)?);
//!
//! // Malformed and out-of-range cantos are distinct errors.
//! assert!(repo.count_verses("x").unwrap_err().code == canti_core::ErrorCode::InvalidArgument);
//! assert!(repo.count_verses(35).unwrap_err().is_not_found());
//! # Ok::<(), canti_core::CantiError>(())
//! ```

pub mod canto;
pub mod error;
pub mod persist;
pub mod repository;
pub mod sanitize;
pub mod settings;

pub use canti_types as types;

pub use canto::CantoArg;
pub use error::{CantiError, ErrorCode, Result};
pub use repository::CantoRepository;
pub use sanitize::{EXCLUDED_CHARS, is_excluded, sanitize_verse};
pub use settings::{LoadOptions, RepositorySettings};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
