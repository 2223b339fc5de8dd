// File logging via tracing. The terminal is in raw mode, so nothing is printed;
// lines go to `<data_dir>/modedeck/modedeck.log` unless `[logging] file` says otherwise.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing_appender::rolling;
use tracing_subscriber::{filter::Directive, fmt, prelude::*, EnvFilter};

use crate::config::LoggingConfig;

const LOG_FILE: &str = "modedeck.log";

pub fn log_path(config: &LoggingConfig) -> PathBuf {
    config.file.clone().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("modedeck")
            .join(LOG_FILE)
    })
}

/// `RUST_LOG` for other crates, plus `modedeck=<level>` for ours.
pub fn filter(level: &str) -> anyhow::Result<EnvFilter> {
    let directive: Directive = format!("modedeck={}", level.trim().to_lowercase())
        .parse()
        .with_context(|| format!("invalid log level {level:?}"))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

pub fn init(config: &LoggingConfig) -> anyhow::Result<()> {
    let filter = filter(&config.level)?;
    let path = log_path(config);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(rolling::never(dir, file_name));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .with(filter)
        .init();

    // The writer flushes on drop; keep it for the life of the process.
    std::mem::forget(guard);
    Ok(())
}
