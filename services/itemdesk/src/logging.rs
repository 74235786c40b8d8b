//! Logging:
//! 1. Compact stdout layer filtered by `RUST_LOG` (default `info`).
//! 2. Optional daily-rolling file layer under `ITEMDESK_LOG_DIR`.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Directory for file logs; file logging is off when unset.
const LOG_DIR_ENV: &str = "ITEMDESK_LOG_DIR";
/// File log level (independent of `RUST_LOG`).
const FILE_LOG_LEVEL_ENV: &str = "ITEMDESK_FILE_LOG_LEVEL";
/// Default stdout filter.
const DEFAULT_STDOUT_FILTER: &str = "info";

/// Keeps the non-blocking writers alive until shutdown.
pub(crate) struct LogRuntime {
    _stdout_guard: WorkerGuard,
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub(crate) fn init(service_name: &str) -> Result<LogRuntime> {
    let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(stdout_writer)
        .with_ansi(true)
        .with_target(false)
        .compact()
        .with_filter(resolve_stdout_env_filter());

    let (file_layer, file_guard) = match resolve_log_dir() {
        Some(dir) => {
            fs::create_dir_all(&dir)
                .with_context(|| format!("create log dir: {}", dir.display()))?;
            let appender = tracing_appender::rolling::daily(&dir, format!("{service_name}.log"));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_filter(resolve_file_level_filter());
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .context("install tracing subscriber")?;

    Ok(LogRuntime {
        _stdout_guard: stdout_guard,
        _file_guard: file_guard,
    })
}

/// `RUST_LOG` first, then the default.
fn resolve_stdout_env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_STDOUT_FILTER))
}

/// File logs default to `debug`.
fn resolve_file_level_filter() -> LevelFilter {
    parse_level(std::env::var(FILE_LOG_LEVEL_ENV).ok().as_deref())
}

fn parse_level(raw: Option<&str>) -> LevelFilter {
    raw.and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::DEBUG)
}

fn resolve_log_dir() -> Option<PathBuf> {
    std::env::var(LOG_DIR_ENV)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
        .map(PathBuf::from)
}
