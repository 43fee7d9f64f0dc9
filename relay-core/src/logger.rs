//! Tracing initialization: a console stream, optionally tee'd into a log file with the same fmt layout.

use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::format::FmtSpan,
    fmt::writer::{BoxMakeWriter, MakeWriterExt},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Console stream for log lines. Use `Stderr` when stdout carries program output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogConsole {
    Stdout,
    Stderr,
}

/// Builds the filter from `RUST_LOG`, falling back to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs the global tracing subscriber.
///
/// Level comes from `RUST_LOG` (default `info`); load `.env` before calling or it is ignored.
/// When `log_file_path` is set, the file is created (with parent directories) and opened in append mode.
pub fn init_tracing(log_file_path: Option<&str>, console: LogConsole) -> anyhow::Result<()> {
    match log_file_path {
        Some(path) => {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let file = Arc::new(file);
            let writer = match console {
                LogConsole::Stdout => BoxMakeWriter::new(io::stdout.and(file)),
                LogConsole::Stderr => BoxMakeWriter::new(io::stderr.and(file)),
            };
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_thread_ids(true)
                .with_ansi(false);
            Registry::default()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
        None => {
            let writer = match console {
                LogConsole::Stdout => BoxMakeWriter::new(io::stdout),
                LogConsole::Stderr => BoxMakeWriter::new(io::stderr),
            };
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_span_events(FmtSpan::CLOSE)
                .with_target(true)
                .with_thread_ids(true);
            Registry::default()
                .with(env_filter())
                .with(fmt_layer)
                .try_init()
                .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;
        }
    }
    Ok(())
}
