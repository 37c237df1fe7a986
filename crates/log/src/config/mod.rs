//! Configuration types
//!
//! This module provides the resolved logger configuration, organized into:
//! - `base`: Core configuration structs (Config, Format, Level)
//! - `writer`: Output stream selection
//! - `presets`: Pre-configured option sets (development, production)

mod base;
mod presets;
mod writer;

// Re-export all public types
pub use base::{Config, Format, Level, ParseFormatError, ParseLevelError};
pub use writer::WriterConfig;
