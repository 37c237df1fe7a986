//! Process-wide installation and runtime replacement of the layer stack
//!
//! The first install sets a [`Registry`] with two reload layers as the global
//! default: the level filter directly over the registry, the formatter over
//! that. Every later install swaps both, so a re-init fully replaces the
//! previous configuration, global threshold included.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwapOption;
use parking_lot::Mutex;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    Registry, fmt::writer::BoxMakeWriter, layer::Layered, layer::SubscriberExt, reload,
};

use super::{BoxedLayer, build_filter, build_fmt_layer};
use crate::config::Config;
use crate::core::LogResult;
use crate::writer::make_writer;

/// Registry plus the reloadable level filter
type Filtered = Layered<reload::Layer<LevelFilter, Registry>, Registry>;

/// The complete installed subscriber
type Stack = Layered<reload::Layer<BoxedLayer<Filtered>, Filtered>, Filtered>;

/// Handles to both reloadable halves of the stack
struct Handles {
    filter: reload::Handle<LevelFilter, Registry>,
    fmt: reload::Handle<BoxedLayer<Filtered>, Filtered>,
}

impl Handles {
    /// Swap in the filter and formatter for `config`
    fn reload(&self, config: &Config, writer: BoxMakeWriter) -> LogResult<()> {
        self.filter.reload(build_filter(config))?;
        self.fmt.reload(build_fmt_layer(config, writer))?;
        Ok(())
    }
}

/// Serializes installs
static INSTALL: Mutex<()> = parking_lot::const_mutex(());

/// Set once, by the first successful install
static HANDLES: OnceLock<Handles> = OnceLock::new();

/// Configuration behind the installed stack, read lock-free
static ACTIVE: ArcSwapOption<Config> = ArcSwapOption::const_empty();

fn build_stack(config: &Config, writer: BoxMakeWriter) -> (Stack, Handles) {
    let (filter, filter_handle) = reload::Layer::new(build_filter(config));
    let (fmt, fmt_handle) = reload::Layer::new(build_fmt_layer(config, writer));
    let handles = Handles {
        filter: filter_handle,
        fmt: fmt_handle,
    };
    (Registry::default().with(filter).with(fmt), handles)
}

/// Install `config` as the process-wide logger, replacing any previous one
pub(crate) fn install(config: Config) -> LogResult<()> {
    let _guard = INSTALL.lock();
    let writer = make_writer(config.writer());

    if let Some(handles) = HANDLES.get() {
        handles.reload(&config, writer)?;
    } else {
        let (stack, handles) = build_stack(&config, writer);
        tracing::subscriber::set_global_default(stack)?;

        // Another `log` logger may already be set; nothing to reconcile.
        #[cfg(feature = "log-compat")]
        let _ = tracing_log::LogTracer::init();

        // Cannot already be set: we hold the install lock and the global
        // default accepted our subscriber.
        let _ = HANDLES.set(handles);
    }

    tracing::debug!(
        format = %config.format(),
        level = %config.level(),
        caller = config.with_caller(),
        color = config.with_color(),
        "Logger installed"
    );
    ACTIVE.store(Some(Arc::new(config)));
    Ok(())
}

/// Configuration of the installed logger, `None` before the first install
pub(crate) fn current() -> Option<Arc<Config>> {
    ACTIVE.load_full()
}
