//! Environment overrides
//!
//! The last and strongest configuration layer. Each variable is applied
//! independently: a valid value overwrites its field, an invalid one leaves
//! the field alone and produces a [`ConfigWarning`].
//!
//! | Variable | Field | Valid values |
//! |---|---|---|
//! | `LOG_LEVEL` | level | `trace`, `debug`, `info`, `warn`, `error`, `fatal`, `panic`, `off` |
//! | `LOG_FORMAT` | format | `json`, `text` |
//! | `LOG_CALLER` | caller capture | boolean token |
//! | `LOG_COLOR` | color | boolean token |
//!
//! A variable that is set but blank counts as unset.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::config::{Config, Format, Level};

/// Severity threshold override
pub const LOG_LEVEL: &str = "LOG_LEVEL";
/// Output format override
pub const LOG_FORMAT: &str = "LOG_FORMAT";
/// Call-site capture override
pub const LOG_CALLER: &str = "LOG_CALLER";
/// Color override
pub const LOG_COLOR: &str = "LOG_COLOR";

/// Source of environment variables
///
/// [`ProcessEnv`] reads the real process table. Maps implement it so that
/// precedence can be exercised without mutating the process environment.
pub trait EnvSource {
    /// Look up a variable, `None` when unset or not valid unicode
    fn get(&self, key: &str) -> Option<String>;
}

/// The process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl EnvSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        BTreeMap::get(self, key).cloned()
    }
}

impl<E: EnvSource + ?Sized> EnvSource for &E {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// An environment value that was present but could not be used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Variable name
    pub var: &'static str,
    /// Raw value as found in the environment
    pub value: String,
    /// Why the value was rejected
    pub reason: String,
}

impl ConfigWarning {
    fn new(var: &'static str, value: &str, reason: impl fmt::Display) -> Self {
        Self {
            var,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Emit this warning through the current `tracing` dispatcher
    pub fn emit(&self) {
        tracing::warn!(
            var = self.var,
            value = %self.value,
            reason = %self.reason,
            "Ignoring invalid {} value, keeping the previous setting",
            self.var
        );
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}='{}': {}", self.var, self.value, self.reason)
    }
}

/// Unrecognized boolean token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid boolean '{0}', expected one of 1, t, true, 0, f, false")]
pub struct ParseBoolError(String);

/// Parse a boolean token
///
/// Accepts `1 t T TRUE true True` and `0 f F FALSE false False`; nothing
/// else, so `yes` or `on` are rejected rather than guessed at.
pub fn parse_bool(value: &str) -> Result<bool, ParseBoolError> {
    match value.trim() {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        other => Err(ParseBoolError(other.to_string())),
    }
}

/// Apply every environment override to `config`
///
/// Returns the warnings for values that were present but rejected; their
/// fields keep the value they had on entry.
pub fn apply_overrides(config: &mut Config, env: &impl EnvSource) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(value) = lookup(env, LOG_LEVEL) {
        match value.parse::<Level>() {
            Ok(level) => config.level = level,
            Err(e) => warnings.push(ConfigWarning::new(LOG_LEVEL, &value, e)),
        }
    }

    if let Some(value) = lookup(env, LOG_FORMAT) {
        match value.parse::<Format>() {
            Ok(format) => config.format = format,
            Err(e) => warnings.push(ConfigWarning::new(LOG_FORMAT, &value, e)),
        }
    }

    override_bool(env, LOG_CALLER, &mut config.with_caller, &mut warnings);
    override_bool(env, LOG_COLOR, &mut config.with_color, &mut warnings);

    warnings
}

fn override_bool(
    env: &impl EnvSource,
    var: &'static str,
    target: &mut bool,
    warnings: &mut Vec<ConfigWarning>,
) {
    if let Some(value) = lookup(env, var) {
        match parse_bool(&value) {
            Ok(enabled) => *target = enabled,
            Err(e) => warnings.push(ConfigWarning::new(var, &value, e)),
        }
    }
}

fn lookup(env: &impl EnvSource, var: &str) -> Option<String> {
    env.get(var).filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Options, with_caller, with_level};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn resolve(options: Options, pairs: &[(&str, &str)]) -> (Config, Vec<ConfigWarning>) {
        let mut config = options.build();
        let warnings = apply_overrides(&mut config, &env(pairs));
        (config, warnings)
    }

    #[test]
    fn empty_environment_changes_nothing() {
        let (config, warnings) = resolve(Options::new(), &[]);
        assert_eq!(config, Config::default());
        assert!(warnings.is_empty());
    }

    #[rstest]
    #[case("trace", Level::Trace)]
    #[case("debug", Level::Debug)]
    #[case("info", Level::Info)]
    #[case("warn", Level::Warn)]
    #[case("error", Level::Error)]
    #[case("fatal", Level::Error)]
    #[case("panic", Level::Error)]
    #[case("off", Level::Off)]
    fn valid_level_overrides(#[case] token: &str, #[case] expected: Level) {
        let (config, warnings) = resolve(Options::new(), &[(LOG_LEVEL, token)]);
        assert_eq!(config.level(), expected);
        assert!(warnings.is_empty());
    }

    #[rstest]
    #[case(Options::new(), Level::Info)]
    #[case(Options::new().level(Level::Debug), Level::Debug)]
    fn invalid_level_keeps_prior_value(#[case] options: Options, #[case] expected: Level) {
        let (config, warnings) = resolve(options, &[(LOG_LEVEL, "invalid_level")]);
        assert_eq!(config.level(), expected);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].var, LOG_LEVEL);
        assert_eq!(warnings[0].value, "invalid_level");
    }

    #[test]
    fn environment_beats_programmatic_caller() {
        let options = Options::new().apply(with_caller(false));
        let (config, _) = resolve(options, &[(LOG_CALLER, "true")]);
        assert!(config.with_caller());
    }

    #[test]
    fn programmatic_caller_survives_without_environment() {
        let (config, _) = resolve(Options::new().apply(with_caller(true)), &[]);
        assert!(config.with_caller());
    }

    #[test]
    fn text_and_color_from_environment() {
        let (config, warnings) =
            resolve(Options::new(), &[(LOG_FORMAT, "text"), (LOG_COLOR, "true")]);
        assert_eq!(config.format(), Format::Text);
        assert!(config.with_color());
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_format_keeps_programmatic_text() {
        let options = Options::new().format(Format::Text);
        let (config, warnings) = resolve(options, &[(LOG_FORMAT, "pretty")]);
        assert_eq!(config.format(), Format::Text);
        assert_eq!(warnings[0].var, LOG_FORMAT);
    }

    #[rstest]
    #[case("yes")]
    #[case("on")]
    #[case("2")]
    fn malformed_boolean_is_ignored(#[case] token: &str) {
        let options = Options::new().caller(true).color(true);
        let (config, warnings) = resolve(options, &[(LOG_CALLER, token), (LOG_COLOR, token)]);
        assert!(config.with_caller());
        assert!(config.with_color());
        let vars: Vec<_> = warnings.iter().map(|w| w.var).collect();
        assert_eq!(vars, vec![LOG_CALLER, LOG_COLOR]);
    }

    #[test]
    fn each_variable_is_independent() {
        let (config, warnings) = resolve(
            Options::new().apply(with_level(Level::Warn)),
            &[(LOG_LEVEL, "nope"), (LOG_CALLER, "1"), (LOG_FORMAT, "text")],
        );
        assert_eq!(config.level(), Level::Warn);
        assert!(config.with_caller());
        assert_eq!(config.format(), Format::Text);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn blank_value_counts_as_unset() {
        let (config, warnings) = resolve(
            Options::new().caller(true),
            &[(LOG_LEVEL, ""), (LOG_CALLER, "  ")],
        );
        assert_eq!(config.level(), Level::Info);
        assert!(config.with_caller());
        assert!(warnings.is_empty());
    }

    #[rstest]
    #[case("1", true)]
    #[case("t", true)]
    #[case("TRUE", true)]
    #[case("True", true)]
    #[case("0", false)]
    #[case("F", false)]
    #[case("false", false)]
    fn boolean_tokens(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(parse_bool(token), Ok(expected));
    }

    #[test]
    fn mixed_case_boolean_is_rejected() {
        assert!(parse_bool("tRuE").is_err());
    }

    #[test]
    fn warning_display_names_the_variable() {
        let warning = ConfigWarning::new(LOG_COLOR, "maybe", "bad");
        assert_eq!(warning.to_string(), "invalid LOG_COLOR='maybe': bad");
    }
}
