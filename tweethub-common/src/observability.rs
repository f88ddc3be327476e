//! Logging setup for the `tweethub` binary and its tests.
//!
//! One daily-rolling log file plus, by default, a copy of every event on
//! stderr so interactive runs can be followed without tailing the file.
//! [`init_logging`] may be called more than once; only the first call
//! installs the subscriber, later callers just get the resolved path back.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_NAME: &str = "tweethub";
const LOG_DIR_ENV: &str = "TWEETHUB_LOG_DIR";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Explicit log directory. `None` falls back to `TWEETHUB_LOG_DIR`,
    /// then `~/.local/share/tweethub`.
    pub log_dir: Option<PathBuf>,
    /// Mirror events to stderr in addition to the file sink.
    pub emit_stderr: bool,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: &'static str,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: None,
            emit_stderr: true,
            default_filter: "info",
        }
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Returns the concrete log file path for the current day.
pub fn init_logging(config: LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let dir = resolve_log_dir(config.log_dir.as_deref());
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create log directory: {}", dir.display()))?;

    let filename = format!("{APP_NAME}.log");
    let today = Local::now().format("%Y-%m-%d").to_string();
    let full_path = dir.join(today).join(&filename);

    let (writer, guard) = tracing_appender::non_blocking(rolling::daily(&dir, filename));
    let _ = LOG_GUARD.set(guard);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.default_filter));
    let stderr_layer = config
        .emit_stderr
        .then(|| fmt::layer().with_writer(io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(stderr_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let _ = LOG_PATH.set(full_path.clone());
    Ok(full_path)
}

fn resolve_log_dir(explicit: Option<&Path>) -> PathBuf {
    let candidate = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from));

    match candidate {
        Some(dir) => expand_home(&dir),
        None => match std::env::var("HOME") {
            Ok(home) => PathBuf::from(home)
                .join(".local")
                .join("share")
                .join(APP_NAME),
            Err(_) => PathBuf::from(".").join(APP_NAME),
        },
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (
        path.to_str().and_then(|s| s.strip_prefix("~/")),
        std::env::var("HOME"),
    ) {
        (Some(rest), Ok(home)) => PathBuf::from(home).join(rest),
        _ => path.to_path_buf(),
    }
}
