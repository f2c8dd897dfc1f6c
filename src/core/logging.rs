//! Logging initialization
//!
//! Console output always, plus a log file when LOG_FILE_PATH is set.
//! Level comes from LOG_LEVEL (default: info).

use anyhow::Result;
use simplelog::*;
use std::fs::File;
use std::path::Path;

/// Parses a LOG_LEVEL value. Unknown or missing values fall back to `Info`.
pub fn level_from_str(value: Option<&str>) -> LevelFilter {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") | Some("warning") => LevelFilter::Warn,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

/// Initialize logger for console and, optionally, file output
///
/// # Arguments
/// * `level` - Maximum level to emit
/// * `log_file_path` - Optional path to a log file (truncated on start)
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Log file could not be created or a logger is already set
pub fn init_logger(level: LevelFilter, log_file_path: Option<&Path>) -> Result<()> {
    let config = ConfigBuilder::new()
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .add_filter_ignore_str("html5ever")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    if let Some(path) = log_file_path {
        let log_file = File::create(path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;
        loggers.push(WriteLogger::new(level, config, log_file));
    }

    CombinedLogger::init(loggers).map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}
