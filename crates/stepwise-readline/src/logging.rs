use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "stepwise.log";

/// Installs the global subscriber.
///
/// `RUST_LOG` wins over `filter`. With a `directory` the output goes to a
/// daily-rolling file and the returned guard must be kept alive until exit;
/// otherwise it goes to stderr so it does not interleave with the REPL.
pub fn init(filter: &str, directory: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(env_filter) => env_filter,
        Err(_) => EnvFilter::try_new(filter)
            .with_context(|| format!("invalid log filter '{}'", filter))?,
    };

    match directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install file logger: {}", e))?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init()
                .map_err(|e| anyhow!("failed to install stderr logger: {}", e))?;
            Ok(None)
        }
    }
}
