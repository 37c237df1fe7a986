//! Programmatic options
//!
//! Two equivalent surfaces: ordered [`LogOption`] values built with the
//! `with_*` constructors, and the chained [`Options`] builder. Both fold
//! field-level overrides over [`Config::default`]; a later override of the
//! same field wins.

use serde::Serialize;

use crate::config::{Config, Format, Level, WriterConfig};

/// A single field-level override
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LogOption {
    /// Set the severity threshold
    Level(Level),
    /// Set the output format
    Format(Format),
    /// Enable or disable call-site capture
    Caller(bool),
    /// Enable or disable ANSI colors for text output
    Color(bool),
    /// Attach a version tag to every record; `null` clears it
    Version(serde_json::Value),
    /// Select the output stream
    Writer(WriterConfig),
}

impl LogOption {
    /// Enable call-site capture, shorthand for `with_caller(true)`
    #[must_use]
    pub const fn caller() -> Self {
        LogOption::Caller(true)
    }

    /// Enable colors, shorthand for `with_color(true)`
    #[must_use]
    pub const fn color() -> Self {
        LogOption::Color(true)
    }

    /// Apply this override to a configuration
    pub fn apply(self, config: &mut Config) {
        match self {
            LogOption::Level(level) => config.level = level,
            LogOption::Format(format) => config.format = format,
            LogOption::Caller(enabled) => config.with_caller = enabled,
            LogOption::Color(enabled) => config.with_color = enabled,
            LogOption::Version(serde_json::Value::Null) => config.version = None,
            LogOption::Version(version) => config.version = Some(version),
            LogOption::Writer(writer) => config.writer = writer,
        }
    }
}

/// Set the severity threshold
pub fn with_level(level: Level) -> LogOption {
    LogOption::Level(level)
}

/// Set the output format
pub fn with_format(format: Format) -> LogOption {
    LogOption::Format(format)
}

/// Enable or disable file and line capture on every record
///
/// [`LogOption::caller`] is the argument-free way to turn it on.
pub fn with_caller(enabled: bool) -> LogOption {
    LogOption::Caller(enabled)
}

/// Enable or disable ANSI colors for text output
///
/// [`LogOption::color`] is the argument-free way to turn them on.
pub fn with_color(enabled: bool) -> LogOption {
    LogOption::Color(enabled)
}

/// Attach a version tag to every record
///
/// Any serializable value works: a plain string, a number, or a struct with
/// build metadata. `None`, `()` and values that fail to serialize clear the
/// version instead.
pub fn with_version(version: impl Serialize) -> LogOption {
    LogOption::Version(serde_json::to_value(version).unwrap_or(serde_json::Value::Null))
}

/// Select the output stream
pub fn with_writer(writer: WriterConfig) -> LogOption {
    LogOption::Writer(writer)
}

/// Logger options builder
///
/// ```
/// use logboot::{Format, Level, Options};
///
/// let config = Options::new()
///     .format(Format::Text)
///     .level(Level::Debug)
///     .version("1.0.3")
///     .build();
///
/// assert_eq!(config.level(), Level::Debug);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    config: Config,
}

impl Options {
    /// Start from the built-in defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. one deserialized from a
    /// host application's config file
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Apply a single override
    #[must_use]
    pub fn apply(mut self, option: LogOption) -> Self {
        option.apply(&mut self.config);
        self
    }

    /// Set the severity threshold
    #[must_use]
    pub fn level(self, level: Level) -> Self {
        self.apply(with_level(level))
    }

    /// Set the output format
    #[must_use]
    pub fn format(self, format: Format) -> Self {
        self.apply(with_format(format))
    }

    /// Enable or disable call-site capture
    #[must_use]
    pub fn caller(self, enabled: bool) -> Self {
        self.apply(with_caller(enabled))
    }

    /// Enable or disable ANSI colors for text output
    #[must_use]
    pub fn color(self, enabled: bool) -> Self {
        self.apply(with_color(enabled))
    }

    /// Attach a version tag to every record
    #[must_use]
    pub fn version(self, version: impl Serialize) -> Self {
        self.apply(with_version(version))
    }

    /// Select the output stream
    #[must_use]
    pub fn writer(self, writer: WriterConfig) -> Self {
        self.apply(with_writer(writer))
    }

    /// Finalize the programmatic layer without consulting the environment
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}

impl Extend<LogOption> for Options {
    fn extend<I: IntoIterator<Item = LogOption>>(&mut self, iter: I) {
        for option in iter {
            option.apply(&mut self.config);
        }
    }
}

impl FromIterator<LogOption> for Options {
    fn from_iter<I: IntoIterator<Item = LogOption>>(iter: I) -> Self {
        let mut options = Self::new();
        options.extend(iter);
        options
    }
}

impl From<Config> for Options {
    fn from(config: Config) -> Self {
        Self::from_config(config)
    }
}
