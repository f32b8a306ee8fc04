//! Error types for hashledger

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// The chain has no tail block to link against.
    EmptyChain,
    InvalidBlockLinkage { index: usize },
    HashMismatch { index: usize },
    InvalidGenesis(String),
    InvalidTimestamp(i64),
    ConfigError(String),
    IoError(String),
}

impl fmt::Display for ChainError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ChainError::EmptyChain => write!(f, "Chain has no blocks"),
            ChainError::InvalidBlockLinkage { index } => {
                write!(f, "Invalid block linkage at index {}", index)
            }
            ChainError::HashMismatch { index } => {
                write!(f, "Stored hash does not match block content at index {}", index)
            }
            ChainError::InvalidGenesis(msg) => write!(f, "Invalid genesis block: {}", msg),
            ChainError::InvalidTimestamp(ts) => {
                write!(f, "Timestamp {} is outside the representable range", ts)
            }
            ChainError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            ChainError::IoError(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for ChainError {}

impl From<std::io::Error> for ChainError {
    fn from(err: std::io::Error) -> Self {
        ChainError::IoError(err.to_string())
    }
}

impl From<toml::de::Error> for ChainError {
    fn from(err: toml::de::Error) -> Self {
        ChainError::ConfigError(err.to_string())
    }
}

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ChainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ChainError::EmptyChain.to_string(), "Chain has no blocks");
        assert_eq!(
            ChainError::InvalidBlockLinkage { index: 3 }.to_string(),
            "Invalid block linkage at index 3"
        );
        assert_eq!(
            ChainError::ConfigError("bad zone".to_string()).to_string(),
            "Configuration error: bad zone"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: ChainError = io.into();
        assert!(matches!(err, ChainError::IoError(_)));
        assert!(err.to_string().contains("missing"));
    }
}
