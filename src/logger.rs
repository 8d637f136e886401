//! Logging setup.
//!
//! Library code logs through the `log` macros; this module wires them to a
//! `fern` dispatch writing timestamped lines to a file or to stderr.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use log::LevelFilter;
use std::path::PathBuf;

/// Parse a level name from configuration, accepting "warning" for "warn".
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let level = level.trim();
    if level.eq_ignore_ascii_case("warning") {
        return Some(LevelFilter::Warn);
    }
    level.parse::<LevelFilter>().ok()
}

/// Logging destination and verbosity resolved from configuration
#[derive(Debug, Clone)]
pub struct Logger {
    enabled: bool,
    level: LevelFilter,
    file: Option<PathBuf>,
}

impl Logger {
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let level = parse_level(&config.level)
            .with_context(|| format!("Invalid logging level '{}'", config.level))?;

        Ok(Self {
            enabled: config.enabled,
            level,
            file: config.file.clone(),
        })
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled && self.level != LevelFilter::Off
    }

    pub fn level(&self) -> LevelFilter {
        if self.enabled {
            self.level
        } else {
            LevelFilter::Off
        }
    }

    pub fn has_file_writer(&self) -> bool {
        self.is_enabled() && self.file.is_some()
    }

    /// Default location for a log file, next to the application data
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("truckbook").join("truckbook.log"))
    }

    /// Build the dispatch without installing it.
    pub fn dispatch(&self) -> Result<fern::Dispatch> {
        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {:<5} {}] {}",
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(self.level());

        if !self.is_enabled() {
            return Ok(dispatch);
        }

        match &self.file {
            Some(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
                }
                let file = fern::log_file(path)
                    .with_context(|| format!("Failed to open log file: {}", path.display()))?;
                Ok(dispatch.chain(file))
            }
            None => Ok(dispatch.chain(std::io::stderr())),
        }
    }

    /// Install as the global logger. Fails if one is already set.
    pub fn init(&self) -> Result<()> {
        self.dispatch()?
            .apply()
            .context("Failed to install logger")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("INFO"), Some(LevelFilter::Info));
        assert_eq!(parse_level(" warning "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("Off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_disabled_logger_is_off() {
        let config = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        let logger = Logger::from_config(&config).unwrap();
        assert!(!logger.is_enabled());
        assert_eq!(logger.level(), LevelFilter::Off);
        assert!(!logger.has_file_writer());
    }
}
