//! Shared observability helpers for the binary and integration tests.
//!
//! Centralises our `tracing` setup so everything emits into the same
//! daily-rolling file sink. Call [`init_logging`] once near process start;
//! additional calls are no-ops that simply hand back the resolved log file
//! path.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::Context;
use chrono::Local;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();
static LOG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Output encoding for structured logs.
#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Text,
    Json,
}

/// Configuration passed to [`init_logging`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Logical name of the component; used for file names and the default
    /// log directory.
    pub app_name: &'static str,
    /// Explicit log directory. When `None` we consult `STAYSCOUT_LOG_DIR`,
    /// then fall back to `~/.local/share/<app_name>`.
    pub log_dir: Option<PathBuf>,
    /// Duplicate events to stderr in addition to the file sink.
    pub emit_stderr: bool,
    /// Preferred log encoding.
    pub format: LogFormat,
    /// Filter applied when `RUST_LOG` is unset.
    pub default_filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            app_name: "stayscout",
            log_dir: None,
            emit_stderr: false,
            format: LogFormat::Text,
            default_filter: "info".to_string(),
        }
    }
}

/// Initialise the global `tracing` subscriber.
///
/// Returns the concrete log file path for the current day. Subsequent calls
/// are cheap and return the originally resolved location.
pub fn init_logging(config: LogConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = LOG_PATH.get() {
        return Ok(path.clone());
    }

    let log_dir = resolve_log_dir(config.app_name, config.log_dir.as_deref());
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory: {}", log_dir.display()))?;

    let log_filename = format!("{}.log", config.app_name);
    let today = Local::now().format("%Y-%m-%d").to_string();
    let full_path = log_dir.join(&today).join(&log_filename);

    let appender = rolling::daily(log_dir, log_filename);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));
    let registry = tracing_subscriber::registry().with(env_filter);

    let init_result = match config.format {
        LogFormat::Text => {
            let file = fmt::layer().with_writer(writer).with_ansi(false);
            let stderr = config
                .emit_stderr
                .then(|| fmt::layer().with_writer(std::io::stderr));
            registry.with(file).with(stderr).try_init()
        }
        LogFormat::Json => {
            let file = fmt::layer().json().with_writer(writer);
            let stderr = config
                .emit_stderr
                .then(|| fmt::layer().json().with_writer(std::io::stderr));
            registry.with(file).with(stderr).try_init()
        }
    };
    init_result.map_err(|e| anyhow::anyhow!("tracing setup failed: {e}"))?;

    let _ = LOG_PATH.set(full_path.clone());
    Ok(full_path)
}

fn resolve_log_dir(app_name: &str, explicit: Option<&Path>) -> PathBuf {
    if let Some(dir) = explicit {
        return expand_home(dir);
    }

    if let Ok(env_dir) = std::env::var("STAYSCOUT_LOG_DIR") {
        return expand_home(Path::new(&env_dir));
    }

    default_data_dir(app_name)
}

fn expand_home(path: &Path) -> PathBuf {
    if let Some(rest) = path.to_str().and_then(|s| s.strip_prefix("~/")) {
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    path.to_path_buf()
}

fn default_data_dir(app_name: &str) -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join(app_name)
    } else {
        PathBuf::from(".").join(app_name)
    }
}
