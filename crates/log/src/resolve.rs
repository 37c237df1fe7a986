//! Option resolution: defaults, then programmatic options, then environment

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::Options;
use crate::builder::build_subscriber;
use crate::config::Config;
use crate::env::{ConfigWarning, EnvSource, apply_overrides};
use crate::writer::make_writer;

/// Outcome of resolving options against an environment
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    programmatic: Config,
    config: Config,
    warnings: Vec<ConfigWarning>,
}

impl Resolution {
    /// Fold `options` over the defaults, then apply `env` on top
    pub fn new(options: Options, env: &impl EnvSource) -> Self {
        let programmatic = options.build();
        let mut config = programmatic.clone();
        let warnings = apply_overrides(&mut config, env);
        Self {
            programmatic,
            config,
            warnings,
        }
    }

    /// Configuration before environment overrides
    pub fn programmatic(&self) -> &Config {
        &self.programmatic
    }

    /// Fully resolved configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Environment values that were present but rejected
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Emit the warnings as `WARN` records
    ///
    /// They go through a temporary logger built from the configuration as it
    /// stood before the environment step, so e.g. a programmatic
    /// `Level::Error` silences them.
    pub fn emit_warnings(&self) {
        self.emit_warnings_to(make_writer(self.programmatic.writer()));
    }

    /// Emit the warnings as `WARN` records into `writer`
    ///
    /// Same as [`emit_warnings`](Self::emit_warnings) with the configured
    /// output stream replaced.
    pub fn emit_warnings_to(&self, writer: BoxMakeWriter) {
        if self.warnings.is_empty() {
            return;
        }
        let subscriber = build_subscriber(&self.programmatic, writer);
        tracing::subscriber::with_default(subscriber, || {
            self.warnings.iter().for_each(ConfigWarning::emit);
        });
    }

    /// Take the resolved configuration
    pub fn into_config(self) -> Config {
        self.config
    }
}
