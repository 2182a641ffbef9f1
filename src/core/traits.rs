//! Core trait definitions for the catalog editor
//!
//! The session talks to the filesystem and to the operator only through
//! these traits, so it can be driven by scripted input and in-memory
//! storage in tests.

use crate::core::data::Catalog;
use crate::utils::error::{AppError, AppResult};
use std::path::PathBuf;

/// Result of loading both documents
#[derive(Debug, Clone, Default)]
pub struct CatalogLoad {
    pub catalog: Catalog,
    /// Documents that did not exist and were treated as empty
    pub missing: Vec<PathBuf>,
}

/// Per-document outcome of a full save, in write order
#[derive(Debug, Clone, Default)]
pub struct SaveReport {
    pub results: Vec<(PathBuf, AppResult<()>)>,
}

impl SaveReport {
    /// True when every document was written.
    pub fn is_complete(&self) -> bool {
        self.results.iter().all(|(_, result)| result.is_ok())
    }

    pub fn failures(&self) -> impl Iterator<Item = &AppError> {
        self.results.iter().filter_map(|(_, result)| result.as_ref().err())
    }
}

/// Storage operations for the catalog documents
pub trait CatalogStorage {
    /// Fail unless the data directory is present
    fn ensure_storage_exists(&self) -> AppResult<()>;

    /// Load both documents; missing files load as empty
    fn load_catalog(&self) -> AppResult<CatalogLoad>;

    /// Write both documents, attempting each one even if an earlier write failed
    fn save_catalog(&self, catalog: &Catalog) -> SaveReport;
}

/// Line-oriented operator input
pub trait Prompter {
    /// Show `prompt` and return the trimmed line the operator entered.
    ///
    /// Returns [`AppError::Interrupted`] when the operator interrupts or input ends.
    fn read_line(&mut self, prompt: &str) -> AppResult<String>;
}

impl<P: Prompter + ?Sized> Prompter for &mut P {
    fn read_line(&mut self, prompt: &str) -> AppResult<String> {
        (**self).read_line(prompt)
    }
}
