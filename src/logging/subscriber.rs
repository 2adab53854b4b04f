//! Tracing subscriber setup: console formatter and initialisation.
use std::io::{IsTerminal as _, Write};

use tracing_subscriber::EnvFilter;

use super::LOG_ENV;
use super::logger::STAGE_TARGET;

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// Render one console line, with or without ANSI styling.
fn format_line(level: tracing::Level, target: &str, msg: &str, ansi: bool) -> String {
    let paint = |code: &str, text: &str| {
        if ansi {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    };
    match level {
        tracing::Level::ERROR => format!("{} {msg}", paint("31", "ERROR")),
        tracing::Level::WARN => format!("{}  {msg}", paint("33", "WARN")),
        tracing::Level::INFO if target == STAGE_TARGET => {
            format!("{} {}", paint("1;34", "==>"), paint("1", msg))
        }
        tracing::Level::INFO => format!("  {msg}"),
        _ => format!("  {}", paint("2", msg)),
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits shellrc-style
/// console output.
struct ShellrcFormatter {
    ansi: bool,
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ShellrcFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        writeln!(
            writer,
            "{}",
            format_line(*metadata.level(), metadata.target(), &extractor.message, self.ansi)
        )
    }
}

/// Write one error line to `writer`, styled like logged errors.
fn write_error(writer: &mut impl Write, msg: &str, ansi: bool) -> std::io::Result<()> {
    writeln!(writer, "{}", format_line(tracing::Level::ERROR, "", msg, ansi))
}

/// Report a fatal error on stderr.
///
/// Written directly rather than through [`tracing`], so no `SHELLRC_LOG`
/// directive can hide it.
pub fn report_error(msg: &str) {
    let stderr = std::io::stderr();
    let ansi = stderr.is_terminal();
    write_error(&mut stderr.lock(), msg, ansi).ok();
}

/// Filter used when `SHELLRC_LOG` is unset or invalid.
fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::new(if verbose { "debug" } else { "warn" })
}

/// Initialise the global [`tracing`] subscriber.
///
/// Events are written to stderr. The level is `warn`, or `debug` when
/// `verbose` is set; a valid `SHELLRC_LOG` directive overrides both.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool) {
    use tracing_subscriber::{Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _};

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| default_filter(verbose));
    let ansi = std::io::stderr().is_terminal();

    let console_layer = fmt::layer()
        .event_format(ShellrcFormatter { ansi })
        .with_writer(std::io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
