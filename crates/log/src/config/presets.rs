//! Option presets for common scenarios

use super::{Format, Level};
use crate::Options;

impl Options {
    /// Development options (text, debug level, caller and colors on)
    #[must_use]
    pub fn development() -> Self {
        Self::new()
            .format(Format::Text)
            .level(Level::Debug)
            .caller(true)
            .color(true)
    }

    /// Production options (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self::new()
            .format(Format::Json)
            .level(Level::Info)
            .caller(false)
            .color(false)
    }
}
