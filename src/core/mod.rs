//! Core business logic layer
//!
//! The in-memory catalog, the default-value derivations, and the traits the
//! session uses to reach storage and the operator.

pub mod data;
pub mod derive;
pub mod traits;
