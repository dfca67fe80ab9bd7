//! File-based logging using simplelog
//!
//! Log file location depends on build type:
//! - Debug builds: current working directory (for development convenience)
//! - Release builds: cache directory (~/.cache/paradise-nursery/ on Linux)

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path based on build type
fn log_file_path() -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);

    if cfg!(debug_assertions) {
        PathBuf::from(filename)
    } else {
        nursery_config::cache_dir()
            .map(|dir| dir.join(&filename))
            .unwrap_or_else(|_| PathBuf::from(filename))
    }
}

/// Map a level name to a filter; unknown names fall back to Info
pub fn parse_level(name: &str) -> LevelFilter {
    match name.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Effective level: the configured one wins over RUST_LOG; Debug when
/// neither is set
pub fn resolve_level(configured: Option<&str>, env: Option<&str>) -> LevelFilter {
    configured
        .or(env)
        .map_or(LevelFilter::Debug, parse_level)
}

/// Initialize file-based logging at the RUST_LOG level
///
/// Runs before the config is read so config warnings reach the log file.
/// The writer accepts every record; `apply_level` narrows the facade level
/// once the config is known. Returns the path to the log file.
pub fn init() -> Result<PathBuf> {
    let log_file = log_file_path();

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let file = File::create(&log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;

    WriteLogger::init(LevelFilter::Trace, config, file).context("Failed to initialize logger")?;
    apply_level(None);

    Ok(log_file)
}

/// Set the active level from the config, falling back to RUST_LOG
pub fn apply_level(configured: Option<&str>) -> LevelFilter {
    let env = std::env::var("RUST_LOG").ok();
    let level = resolve_level(configured, env.as_deref());
    log::set_max_level(level);
    level
}
