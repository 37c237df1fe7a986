//! Integration tests for process-wide initialization
//!
//! All tests share one global subscriber, so they run under a lock and each
//! one re-initializes before asserting.

use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

use logboot::env::{LOG_CALLER, LOG_COLOR, LOG_FORMAT, LOG_LEVEL};
use logboot::{Config, Format, Level, Options, with_caller, with_level, with_version};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tracing::level_filters::LevelFilter;

// Serialization lock for tests using global state
static TEST_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

fn init(options: Options, pairs: &[(&str, &str)]) -> Config {
    options
        .try_init_with_env(&env(pairs))
        .expect("logger should install");
    let active = logboot::current().expect("logger should be active");
    (*active).clone()
}

#[test]
fn default_initialization() {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let config = init(Options::new(), &[]);

    assert_eq!(config, Config::default());
    assert_eq!(LevelFilter::current(), LevelFilter::INFO);
}

#[rstest]
#[case("trace", Level::Trace, LevelFilter::TRACE)]
#[case("debug", Level::Debug, LevelFilter::DEBUG)]
#[case("info", Level::Info, LevelFilter::INFO)]
#[case("warn", Level::Warn, LevelFilter::WARN)]
#[case("error", Level::Error, LevelFilter::ERROR)]
#[case("off", Level::Off, LevelFilter::OFF)]
fn environment_level_sets_global_threshold(
    #[case] token: &str,
    #[case] level: Level,
    #[case] filter: LevelFilter,
) {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let config = init(Options::new(), &[(LOG_LEVEL, token)]);

    assert_eq!(config.level(), level);
    assert_eq!(LevelFilter::current(), filter);
}

#[rstest]
#[case(Options::new(), Level::Info)]
#[case(Options::new().apply(with_level(Level::Error)), Level::Error)]
fn invalid_environment_level_keeps_prior_threshold(
    #[case] options: Options,
    #[case] expected: Level,
) {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let config = init(options, &[(LOG_LEVEL, "invalid_level")]);

    assert_eq!(config.level(), expected);
    assert_eq!(LevelFilter::current(), LevelFilter::from(expected));
}

#[test]
fn programmatic_caller_applies() {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let config = init(Options::new().apply(with_caller(true)), &[]);

    assert!(config.with_caller());
}

#[test]
fn environment_caller_beats_programmatic() {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let config = init(
        Options::new().apply(with_caller(false)),
        &[(LOG_CALLER, "true")],
    );

    assert!(config.with_caller());
}

#[test]
fn environment_selects_colored_text() {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let config = init(Options::new(), &[(LOG_FORMAT, "text"), (LOG_COLOR, "true")]);

    assert_eq!(config.format(), Format::Text);
    assert!(config.with_color());
    tracing::info!("rendered as colored text");
}

#[test]
fn reinitialization_supersedes_previous_call() {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let first = init(
        Options::new()
            .level(Level::Debug)
            .format(Format::Text)
            .caller(true)
            .color(true)
            .apply(with_version("1.0.0")),
        &[],
    );
    assert_eq!(first.level(), Level::Debug);
    assert_eq!(LevelFilter::current(), LevelFilter::DEBUG);

    let second = init(Options::new().level(Level::Warn), &[]);

    assert_eq!(second, Options::new().level(Level::Warn).build());
    assert_eq!(second.version(), None);
    assert_eq!(LevelFilter::current(), LevelFilter::WARN);
}

#[test]
fn free_function_init_never_panics() {
    let _guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    logboot::init([with_level(Level::Info), with_version("1.0.3")]);
    logboot::init([]);

    assert!(logboot::current().is_some());
}
