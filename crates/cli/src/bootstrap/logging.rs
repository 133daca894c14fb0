use std::path::Path;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over `level`. A non-empty `log_file` sends
/// output to that file; otherwise, or when the file cannot be opened, to
/// stderr. The returned guard must live until exit so buffered lines are
/// flushed.
pub fn init_logging(level: &str, log_file: Option<&str>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let appender = log_file
        .filter(|path| !path.is_empty())
        .map(|path| (path, file_appender(Path::new(path))));

    match appender {
        Some((path, Ok(appender))) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            info!(log_file = path, "Logging initialized at level: {}", level);
            Some(guard)
        }
        Some((path, Err(e))) => {
            init_stderr(filter);
            warn!(log_file = path, error = %e, "Cannot open log file, logging to stderr");
            None
        }
        None => {
            init_stderr(filter);
            info!("Logging initialized at level: {}", level);
            None
        }
    }
}

fn init_stderr(filter: EnvFilter) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr)
        .init();
}

fn file_appender(path: &Path) -> Result<RollingFileAppender, String> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| format!("{} does not name a file", path.display()))?;
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| e.to_string())
}
