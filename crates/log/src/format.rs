//! Format utilities (time, version injection)

use std::fmt;

use time::format_description::well_known::Rfc3339;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    fmt::{FmtContext, FormatEvent, FormatFields, format::Writer, time::UtcTime},
    registry::LookupSpan,
};

/// Timestamp used by both formats
pub(crate) type Timer = UtcTime<Rfc3339>;

/// RFC 3339 UTC timestamps, e.g. `2024-05-01T12:00:00.123456Z`
pub(crate) fn make_timer() -> Timer {
    UtcTime::rfc_3339()
}

const VERSION: &str = "version";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Json,
    Text,
}

/// Event formatter that appends a fixed `version` field to every record
///
/// The inner formatter renders into a buffer first; the version is then
/// spliced in as the last key of the JSON object, or appended as
/// `version=<v>` at the end of a text line. Without a version, or when the
/// event carries its own `version` field, the inner formatter writes straight
/// through so that every record has exactly one `version`.
#[derive(Debug, Clone)]
pub(crate) struct VersionedFormat<F> {
    inner: F,
    style: Style,
    rendered: Option<String>,
}

impl<F> VersionedFormat<F> {
    pub(crate) fn json(inner: F, version: Option<&serde_json::Value>) -> Self {
        Self {
            inner,
            style: Style::Json,
            rendered: version.map(ToString::to_string),
        }
    }

    pub(crate) fn text(inner: F, version: Option<&serde_json::Value>) -> Self {
        Self {
            inner,
            style: Style::Text,
            rendered: version.map(|v| match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            }),
        }
    }
}

impl<S, N, F> FormatEvent<S, N> for VersionedFormat<F>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    F: FormatEvent<S, N>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let Some(version) = self.rendered.as_ref().filter(|_| !shadows_version(event)) else {
            return self.inner.format_event(ctx, writer, event);
        };

        let mut buffer = String::new();
        self.inner.format_event(ctx, Writer::new(&mut buffer), event)?;
        let line = buffer.trim_end_matches('\n');

        match self.style {
            // The JSON formatter always emits a non-empty object.
            Style::Json => match line.strip_suffix('}') {
                Some(body) => writeln!(writer, "{body},\"version\":{version}}}"),
                None => writeln!(writer, "{line}"),
            },
            Style::Text => writeln!(writer, "{line} version={version}"),
        }
    }
}

/// The event has a field of its own named `version`
fn shadows_version(event: &Event<'_>) -> bool {
    event.metadata().fields().field(VERSION).is_some()
}
