//! # logboot
//!
//! One call at startup configures the process-wide logger.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use logboot::prelude::*;
//!
//! logboot::init([with_level(Level::Debug), with_version("1.0.3")]);
//!
//! info!(foo = "bar", "hello world");
//! ```
//!
//! ## Precedence
//!
//! Each field is resolved from three layers, strongest last:
//!
//! 1. Built-in defaults: JSON, `info`, no version, no caller, no color.
//! 2. Programmatic options, applied in order ([`LogOption`] / [`Options`]).
//! 3. Environment: `LOG_LEVEL`, `LOG_FORMAT`, `LOG_CALLER`, `LOG_COLOR`.
//!
//! An invalid environment value is ignored with a warning record; it never
//! aborts initialization.
//!
//! ## Re-initialization
//!
//! Calling [`init`] again re-resolves everything from scratch and replaces
//! the installed logger. Nothing carries over from the previous call.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod core;
pub mod env;
mod format;
mod options;
mod resolve;
mod writer;

use std::sync::Arc;

// Public API
pub use config::{Config, Format, Level, ParseFormatError, ParseLevelError, WriterConfig};
pub use crate::core::{LogError, LogResult};
pub use env::{ConfigWarning, EnvSource, ProcessEnv};
pub use options::{
    LogOption, Options, with_caller, with_color, with_format, with_level, with_version,
    with_writer,
};
pub use resolve::Resolution;

// Re-export tracing macros
pub use tracing::{debug, error, info, trace, warn};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        Format, Level, LogOption, Options, debug, error, info, init, trace, warn, with_caller,
        with_color, with_format, with_level, with_version,
    };
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve options against the process environment
///
/// Rejected environment values are reported as warning records.
pub fn resolve(options: Options) -> Config {
    resolve_with(options, &ProcessEnv)
}

/// Resolve options against an explicit environment source
pub fn resolve_with(options: Options, env: &impl EnvSource) -> Config {
    let resolution = Resolution::new(options, env);
    resolution.emit_warnings();
    resolution.into_config()
}

// ============================================================================
// Initialization Functions
// ============================================================================

/// Initialize the process-wide logger
///
/// Never fails: if the logger cannot be installed (another crate already
/// owns the global `tracing` subscriber) the call has no effect. Use
/// [`try_init`] to find out.
pub fn init(options: impl IntoIterator<Item = LogOption>) {
    let _ = try_init(options);
}

/// Initialize the process-wide logger, reporting installation failures
pub fn try_init(options: impl IntoIterator<Item = LogOption>) -> LogResult<()> {
    options.into_iter().collect::<Options>().try_init()
}

/// Install an already resolved configuration, skipping the environment
pub fn init_with(config: Config) -> LogResult<()> {
    builder::install(config)
}

/// Configuration of the installed logger
///
/// `None` until the first successful initialization.
pub fn current() -> Option<Arc<Config>> {
    builder::current()
}

impl Options {
    /// Resolve against the process environment and install
    pub fn init(self) {
        let _ = self.try_init();
    }

    /// Resolve against the process environment and install, reporting
    /// installation failures
    pub fn try_init(self) -> LogResult<()> {
        self.try_init_with_env(&ProcessEnv)
    }

    /// Resolve against `env` and install
    pub fn try_init_with_env(self, env: &impl EnvSource) -> LogResult<()> {
        init_with(resolve_with(self, env))
    }
}
