//! Logging setup.
//!
//! Human-readable logs go to stderr so stdout stays clean for diagnostics
//! and JSON. When a log file or directory is configured, a second layer
//! writes JSON lines through a non-blocking, daily-rolling appender.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_PATH_ENV: &str = "MQLINT_LOG_PATH";
const LOG_DIR_ENV: &str = "MQLINT_LOG_DIR";
const LOG_FILE_PREFIX: &str = "mqlint.jsonl";

/// Where file logs go, if anywhere.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObservabilityConfig {
    /// Directory of the rolling log file.
    pub log_dir: Option<PathBuf>,
    /// File name prefix inside `log_dir`.
    pub file_prefix: String,
}

impl ObservabilityConfig {
    /// Resolve the log destination.
    ///
    /// `MQLINT_LOG_PATH` names a file and wins; `MQLINT_LOG_DIR` names a
    /// directory; the configured `log_dir` comes last.
    pub fn from_env_with_overrides(config_log_dir: Option<PathBuf>) -> Self {
        Self::resolve(
            std::env::var_os(LOG_PATH_ENV).map(PathBuf::from),
            std::env::var_os(LOG_DIR_ENV).map(PathBuf::from),
            config_log_dir,
        )
    }

    fn resolve(
        log_path: Option<PathBuf>,
        log_dir: Option<PathBuf>,
        config_log_dir: Option<PathBuf>,
    ) -> Self {
        if let Some(path) = log_path {
            let dir = path.parent().map(Path::to_path_buf).filter(|p| !p.as_os_str().is_empty());
            let prefix = path
                .file_name()
                .map_or_else(|| LOG_FILE_PREFIX.to_string(), |n| n.to_string_lossy().into_owned());
            return Self {
                log_dir: Some(dir.unwrap_or_else(|| PathBuf::from("."))),
                file_prefix: prefix,
            };
        }
        Self {
            log_dir: log_dir.or(config_log_dir),
            file_prefix: LOG_FILE_PREFIX.to_string(),
        }
    }
}

/// Build the level filter.
///
/// `RUST_LOG` wins when set; otherwise `-q` means errors only, each `-v`
/// raises the level one step, and with neither the configured level is used.
pub fn env_filter(quiet: bool, verbose: u8, config_level: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => config_level,
            1 => "debug",
            _ => "trace",
        }
    };
    EnvFilter::new(level)
}

/// Install the global subscriber.
///
/// The returned guard flushes the file writer on drop; keep it alive for
/// the life of the process.
pub fn init_observability(
    config: &ObservabilityConfig,
    filter: EnvFilter,
) -> anyhow::Result<Option<WorkerGuard>> {
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let Some(ref dir) = config.log_dir else {
        tracing_subscriber::registry()
            .with(filter)
            .with(stderr_layer)
            .try_init()
            .context("failed to install tracing subscriber")?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let appender = tracing_appender::rolling::daily(dir, &config.file_prefix);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer().json().with_writer(writer);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;
    Ok(Some(guard))
}
