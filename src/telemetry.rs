//! Structured logging: a three-level logger (`info`/`warning` to stdout,
//! `error` to stderr), each line `[LEVEL] YYYY/MM/DD HH:MM:SS message`,
//! built on `tracing` + `tracing-subscriber`.

use std::fmt;

use time::format_description::FormatItem;
use time::macros::format_description;
use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DATE_TIME_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");

/// A [`FormatTime`] impl producing `YYYY/MM/DD HH:MM:SS`.
struct DateTime;

impl FormatTime for DateTime {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let now = time::OffsetDateTime::now_utc();
        write!(w, "{}", now.format(DATE_TIME_FORMAT).map_err(|_| fmt::Error)?)
    }
}

/// Renders `[LEVEL] YYYY/MM/DD HH:MM:SS message`.
struct LevelDateLine;

impl<S, N> FormatEvent<S, N> for LevelDateLine
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> fmt::Result {
        let level = match *event.metadata().level() {
            Level::ERROR => "ERROR",
            Level::WARN => "WARNING",
            Level::INFO => "INFO",
            Level::DEBUG => "DEBUG",
            Level::TRACE => "TRACE",
        };
        write!(writer, "[{level}] ")?;
        DateTime.format_time(&mut writer)?;
        write!(writer, " ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global `tracing` subscriber: one layer writing
/// info/warn/debug/trace to stdout, one writing error to stderr, both using
/// [`LevelDateLine`]'s format, both honoring `RUST_LOG` via `EnvFilter`
/// (defaulting to `info` when unset).
pub fn init() {
    let default_filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LevelDateLine)
        .with_writer(std::io::stdout)
        .with_filter(default_filter())
        .with_filter(tracing_subscriber::filter::filter_fn(|metadata| {
            metadata.level() != &Level::ERROR
        }));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LevelDateLine)
        .with_writer(std::io::stderr)
        .with_filter(default_filter())
        .with_filter(tracing_subscriber::filter::filter_fn(|metadata| {
            metadata.level() == &Level::ERROR
        }));

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(stderr_layer)
        .init();
}
