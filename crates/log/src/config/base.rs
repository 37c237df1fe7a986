//! Core configuration types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;

use super::WriterConfig;

/// Resolved logger configuration
///
/// Produced by [`Options::build`](crate::Options::build) or by the
/// environment-aware [`resolve`](crate::resolve). Fields are read-only once
/// resolved; go back through [`Options`](crate::Options) to change them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub(crate) format: Format,
    pub(crate) level: Level,
    pub(crate) version: Option<serde_json::Value>,
    pub(crate) with_caller: bool,
    pub(crate) with_color: bool,
    pub(crate) writer: WriterConfig,
}

impl Config {
    /// Output format
    #[inline]
    pub fn format(&self) -> Format {
        self.format
    }

    /// Minimum severity a record needs to be emitted
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Version tag attached to every record, if any
    #[inline]
    pub fn version(&self) -> Option<&serde_json::Value> {
        self.version.as_ref()
    }

    /// Whether records carry the file and line of the logging call
    #[inline]
    pub fn with_caller(&self) -> bool {
        self.with_caller
    }

    /// Whether text output uses ANSI colors
    #[inline]
    pub fn with_color(&self) -> bool {
        self.with_color
    }

    /// Output stream
    #[inline]
    pub fn writer(&self) -> WriterConfig {
        self.writer
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::Json,
            level: Level::Info,
            version: None,
            with_caller: false,
            with_color: false,
            writer: WriterConfig::Stderr,
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// One JSON object per line
    Json,
    /// Human-readable console line, optionally colored
    Text,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Text => write!(f, "text"),
        }
    }
}

/// Unknown format token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log format '{0}', expected 'json' or 'text'")]
pub struct ParseFormatError(pub(crate) String);

impl FromStr for Format {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "text" => Ok(Format::Text),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// Log level
///
/// Ordered from most verbose to fully silent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Trace level
    Trace,
    /// Debug level
    Debug,
    /// Info level
    Info,
    /// Warn level
    Warn,
    /// Error level
    Error,
    /// Nothing is emitted
    Off,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Trace => write!(f, "trace"),
            Level::Debug => write!(f, "debug"),
            Level::Info => write!(f, "info"),
            Level::Warn => write!(f, "warn"),
            Level::Error => write!(f, "error"),
            Level::Off => write!(f, "off"),
        }
    }
}

/// Unknown level token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level '{0}'")]
pub struct ParseLevelError(pub(crate) String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// `fatal` and `panic` map to [`Level::Error`], the most severe level
    /// `tracing` emits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" | "warning" => Ok(Level::Warn),
            "error" | "fatal" | "panic" => Ok(Level::Error),
            "off" | "disabled" => Ok(Level::Off),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

impl From<Level> for LevelFilter {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => LevelFilter::TRACE,
            Level::Debug => LevelFilter::DEBUG,
            Level::Info => LevelFilter::INFO,
            Level::Warn => LevelFilter::WARN,
            Level::Error => LevelFilter::ERROR,
            Level::Off => LevelFilter::OFF,
        }
    }
}
