//! Tracing configuration for LifeSync
//!
//! Structured logs go to stderr so command output on stdout stays clean.
//! When file logging is enabled they are also appended to
//! `<logs_dir>/lifesync.log` through a non-blocking writer.

use std::{fs, io, path::Path, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "lifesync.log";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives
///
/// Development builds log the workspace crates at debug, release builds at
/// info, with everything else at warn.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        "warn".to_string(),
        format!("lifesync={level}"),
        format!("lifesync_lib={level}"),
        format!("ls_app={level}"),
        format!("ls_infra={level}"),
    ]
}

/// Initialize the global tracing subscriber
///
/// `RUST_LOG` overrides the default directives. Call once, before any
/// logging occurs.
///
/// # Errors
///
/// Returns `Err` if a subscriber is already registered.
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(build_filter_directives(is_development()).join(",")));

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(
            "%Y-%m-%d %H:%M:%S%.3f".to_string(),
        ))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(BoxMakeWriter::new(io::stderr));

    let file_layer = match log_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer.map(|writer| {
            fmt::layer()
                .with_timer(fmt::time::ChronoUtc::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                ))
                .with_level(true)
                .with_file(true)
                .with_line_number(true)
                .with_target(true)
                .with_ansi(false)
                .with_writer(writer)
        }),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
            None
        }
    };

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
