use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable naming the log file prefix.
pub const LOG_ENV_VAR: &str = "CATFACT_LOG";

/// How the process uses the terminal, which decides where logs may go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// The fact screen owns the terminal; only a log file is safe.
    Interactive,
    /// `--once` prints a single line to stdout; stderr is free.
    Once,
}

/// Where log records end up for a given mode and `CATFACT_LOG` value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Disabled,
    Stderr,
    File(PathBuf),
}

impl LogMode {
    /// Filter used when `RUST_LOG` is unset.
    fn default_filter(self) -> &'static str {
        match self {
            LogMode::Interactive => "info",
            LogMode::Once => "warn",
        }
    }

    pub fn target(self, log_prefix: Option<&str>) -> LogTarget {
        match (log_prefix, self) {
            (Some(prefix), _) if !prefix.is_empty() => LogTarget::File(unique_log_path(prefix)),
            (_, LogMode::Once) => LogTarget::Stderr,
            (_, LogMode::Interactive) => LogTarget::Disabled,
        }
    }
}

/// `{prefix}.{unix seconds}.{pid}`, so concurrent runs get separate files.
fn unique_log_path(prefix: &str) -> PathBuf {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    PathBuf::from(format!("{}.{}.{}", prefix, timestamp, std::process::id()))
}

pub fn init_tracing(mode: LogMode) {
    let prefix = std::env::var(LOG_ENV_VAR).ok();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(mode.default_filter()));

    match mode.target(prefix.as_deref()) {
        LogTarget::Disabled => {}
        LogTarget::Stderr => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time();
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .init();
        }
        LogTarget::File(path) => {
            let file = match std::fs::File::create(&path) {
                Ok(file) => file,
                Err(err) => {
                    eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
                    return;
                }
            };
            let file_layer = fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .init();
        }
    }
}
