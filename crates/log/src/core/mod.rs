//! Core components shared across the crate.
//!
//! ### [`error`] - Error handling
//! [`LogError`] and the [`LogResult`] alias returned by fallible
//! installation.

pub mod error;

// Re-export core types
pub use error::{LogError, LogResult};
