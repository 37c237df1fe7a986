//! Logger builder implementation
//!
//! This module is organized into:
//! - `mod.rs`: turning a [`Config`] into a level filter and a boxed formatter
//! - `reload`: installing both process-wide and swapping them on re-init
//!
//! The filter sits directly on the [`Registry`] so that its level becomes the
//! max level hint of the whole subscriber, which `tracing` publishes as
//! [`LevelFilter::current`].

mod reload;

pub(crate) use reload::{current, install};

// External dependencies
use tracing::{Subscriber, level_filters::LevelFilter};
use tracing_subscriber::{
    Layer, Registry, fmt, fmt::writer::BoxMakeWriter, layer::SubscriberExt, registry::LookupSpan,
};

// Internal crates
use crate::config::{Config, Format};
use crate::format::{VersionedFormat, make_timer};

/// A type-erased formatter layer over the subscriber `S`
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Severity threshold for a resolved configuration
pub(crate) fn build_filter(config: &Config) -> LevelFilter {
    LevelFilter::from(config.level())
}

/// Build the formatter layer for a resolved configuration
pub(crate) fn build_fmt_layer<S>(config: &Config, writer: BoxMakeWriter) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + 'static,
{
    let caller = config.with_caller();

    match config.format() {
        Format::Json => {
            let format = fmt::format()
                .json()
                .flatten_event(true)
                .with_current_span(true)
                .with_span_list(false)
                .with_timer(make_timer())
                .with_file(caller)
                .with_line_number(caller);

            fmt::layer()
                .json()
                .event_format(VersionedFormat::json(format, config.version()))
                .with_ansi(false)
                .with_writer(writer)
                .boxed()
        }
        Format::Text => {
            let format = fmt::format()
                .with_ansi(config.with_color())
                .with_timer(make_timer())
                .with_file(caller)
                .with_line_number(caller);

            fmt::layer()
                .event_format(VersionedFormat::text(format, config.version()))
                .with_ansi(config.with_color())
                .with_writer(writer)
                .boxed()
        }
    }
}

/// A standalone subscriber for `config`, used for scoped dispatch
pub(crate) fn build_subscriber(
    config: &Config,
    writer: BoxMakeWriter,
) -> impl Subscriber + Send + Sync + 'static {
    Registry::default()
        .with(build_filter(config))
        .with(build_fmt_layer(config, writer))
}
