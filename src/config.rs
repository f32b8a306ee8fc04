//! Configuration management for hashledger

use crate::blockchain::{Blockchain, SystemClock, TimestampZone};
use crate::error::{ChainError, Result};
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "hashledger.toml";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct LedgerConfig {
    /// Zone block timestamps are rendered in before hashing.
    #[serde(default)]
    pub timestamp_zone: TimestampZone,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    pub fn log_level(&self) -> Result<Level> {
        self.logging.level.parse().map_err(|_| {
            ChainError::ConfigError(format!("Unknown log level '{}'", self.logging.level))
        })
    }

    /// A fresh chain stamped by the system clock in the configured zone.
    pub fn build_chain(&self) -> Blockchain {
        Blockchain::with_clock(Arc::new(SystemClock), self.ledger.timestamp_zone)
    }
}

/// Reads `path`, falling back to defaults when the file does not exist.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = match fs::read_to_string(path.as_ref()) {
        Ok(s) => s,
        Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    config.log_level()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.ledger.timestamp_zone, TimestampZone::Local);
        assert_eq!(config.log_level().unwrap(), Level::INFO);
    }

    #[test]
    fn test_full_config_is_parsed() {
        let file = write_config(
            r#"
[ledger]
timestamp_zone = "+02:00"

[logging]
level = "debug"
"#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.ledger.timestamp_zone, TimestampZone::Fixed(7200));
        assert_eq!(config.log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config("[ledger]\ntimestamp_zone = \"utc\"\n");
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.ledger.timestamp_zone, TimestampZone::Utc);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_zone_is_rejected() {
        let file = write_config("[ledger]\ntimestamp_zone = \"mars\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ChainError::ConfigError(_)));
        assert!(err.to_string().contains("mars"));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        let err = load_config(file.path()).unwrap_err();
        assert_eq!(
            err,
            ChainError::ConfigError("Unknown log level 'loud'".to_string())
        );
    }

    #[test]
    fn test_build_chain_uses_configured_zone() {
        let file = write_config("[ledger]\ntimestamp_zone = \"utc\"\n");
        let chain = load_config(file.path()).unwrap().build_chain();
        assert_eq!(chain.zone(), TimestampZone::Utc);
        assert_eq!(chain.len(), 1);
        assert!(chain.verify().is_ok());
    }
}
