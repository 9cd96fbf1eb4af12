use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{self, Config};

/// Logs go to a file, the terminal belongs to the UI.
pub fn init(config: &Config) -> Result<()> {
    let log_file = match &config.log_file {
        Some(path) => PathBuf::from(path),
        None => config::get_project_dir()?
            .data_dir()
            .join(format!("{}.log", env!("CARGO_PKG_NAME"))),
    };
    if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty() && !d.is_dir()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Fail to create directory `{}`", dir.display()))?;
    }
    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file)
        .with_context(|| format!("Fail to open log file `{}`", log_file.display()))?;

    // `RUST_LOG` wins over the configured level
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = config.log_level.as_deref().unwrap_or("info");
            EnvFilter::try_new(level).with_context(|| format!("Invalid log level `{level}`"))?
        }
    };

    let file_subscriber = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(writer)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);

    tracing_subscriber::registry().with(file_subscriber).with(ErrorLayer::default()).try_init()?;

    Ok(())
}
