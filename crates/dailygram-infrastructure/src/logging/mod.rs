//! Process-wide logging setup.
//!
//! Every record goes to a daily-rotated file as one JSON object per line.
//! Debug builds also echo records to stdout in a compact human format
//! unless the caller turns that off (the CLI does, to keep stdout clean
//! for its JSON output).
//!
//! Library code logs through the `log` macros; `LogTracer` forwards those
//! records into the tracing subscriber installed here.

use std::path::PathBuf;
use std::sync::OnceLock;

use log::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_log::LogTracer;
use tracing_subscriber::fmt::{format::Writer, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Layer, Registry};

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();
static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_PREFIX: &str = "dailygram.log";

#[derive(Debug, Clone)]
pub struct LoggerOptions {
    pub log_dir: PathBuf,
    /// Filter directive used when `RUST_LOG` is unset, e.g. `"info"`.
    pub level: String,
    /// Echo to stdout. Only honoured in debug builds.
    pub stdout: bool,
}

impl LoggerOptions {
    pub fn new(log_dir: PathBuf) -> Self {
        let level = if cfg!(debug_assertions) {
            "debug"
        } else {
            "info"
        };
        Self {
            log_dir,
            level: level.to_string(),
            stdout: true,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_stdout(mut self, stdout: bool) -> Self {
        self.stdout = stdout;
        self
    }
}

/// Install the global subscriber. Calling it again is a no-op.
pub fn init_logger(options: LoggerOptions) -> anyhow::Result<()> {
    if LOG_DIR.get().is_some() {
        return Ok(());
    }

    std::fs::create_dir_all(&options.log_dir)?;

    let _ = LogTracer::builder()
        .with_max_level(LevelFilter::Trace)
        .init();

    let file_appender = rolling::daily(&options.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let _ = FILE_GUARD.set(guard);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .event_format(JsonLineFormatter::new())
        .with_filter(build_filter(&options.level));

    let stdout_layer = (cfg!(debug_assertions) && options.stdout).then(|| {
        fmt::layer()
            .event_format(ConsoleFormatter)
            .with_filter(build_filter(&options.level))
    });

    let subscriber = Registry::default().with(file_layer).with(stdout_layer);
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    let _ = LOG_DIR.set(options.log_dir.clone());

    tracing::info!(
        target: "dailygram::logging",
        log_dir = %options.log_dir.display(),
        version = env!("CARGO_PKG_VERSION"),
        "Logger initialized"
    );

    Ok(())
}

fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// One JSON object per line with timestamp, level, target, location,
/// message and any structured fields.
struct JsonLineFormatter {
    pid: u32,
}

impl JsonLineFormatter {
    fn new() -> Self {
        Self {
            pid: std::process::id(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for JsonLineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let mut line = serde_json::json!({
            "timestamp": chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            "level": metadata.level().to_string(),
            "target": metadata.target(),
            "pid": self.pid,
            "version": env!("CARGO_PKG_VERSION"),
        });

        if let (Some(file), Some(number)) = (metadata.file(), metadata.line()) {
            line["file"] = serde_json::json!(file);
            line["line"] = serde_json::json!(number);
        }
        if let Some(message) = visitor.fields.remove("message") {
            line["message"] = message;
        }
        if !visitor.fields.is_empty() {
            line["fields"] = serde_json::Value::Object(visitor.fields);
        }

        writeln!(writer, "{}", line)
    }
}

/// `2026-10-15 08:00:01.123 INFO  dailygram_app: message key=value`
struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let message = visitor
            .fields
            .remove("message")
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default();

        let colour = match *metadata.level() {
            Level::ERROR => "31",
            Level::WARN => "33",
            Level::INFO => "32",
            Level::DEBUG => "36",
            Level::TRACE => "35",
        };

        write!(
            writer,
            "{} \x1b[{}m{:<5}\x1b[0m {}: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            colour,
            metadata.level(),
            metadata.target(),
            message
        )?;
        for (key, value) in &visitor.fields {
            write!(writer, " {}={}", key, value)?;
        }
        writeln!(writer)
    }
}

#[derive(Default)]
struct FieldVisitor {
    fields: serde_json::Map<String, serde_json::Value>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_i64(&mut self, field: &tracing::field::Field, value: i64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_bool(&mut self, field: &tracing::field::Field, value: bool) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.fields.insert(field.name().to_string(), value.into());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.fields
            .insert(field.name().to_string(), format!("{:?}", value).into());
    }
}
