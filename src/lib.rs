//! Toolkit Manager - interactive editor for the toolkit catalog
//!
//! The catalog lives in two JSON documents inside a data directory: one maps
//! each category to its ordered list of tools, the other maps each category
//! to its icon class. This library loads both, lets an operator append
//! categories and tools through guided prompts, and writes both back after
//! every change.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod session;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod testing;

// Re-export core types and traits for easier use
pub use crate::core::{
    data::{Catalog, CategoryMap, IconMap, Tool, ToolCatalog},
    derive::{DEFAULT_BANNER, Derived, derive_banner, derive_url},
    traits::{CatalogLoad, CatalogStorage, Prompter, SaveReport},
};
pub use session::{Session, SessionEnd, SessionState};
pub use storage::JsonStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
