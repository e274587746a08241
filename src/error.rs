/// Error types for resource resolution and configuration loading
///
/// None of these are fatal. Resource errors become placeholders in the
/// rendered card, config errors fall back to `AppConfig::default()`.

use std::path::PathBuf;
use thiserror::Error;

/// A text or image handle that resolved to nothing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    #[error("missing text resource `{0}`")]
    MissingText(&'static str),

    #[error("missing image resource `{0}`")]
    MissingImage(&'static str),
}

/// Failure to load or validate `config.json`
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "image shares must satisfy 0 < expanded ({expanded}) < collapsed ({collapsed}) < 1"
    )]
    InvalidShares { collapsed: f32, expanded: f32 },

    #[error("card size must be positive, got {width}x{height}")]
    InvalidCardSize { width: f32, height: f32 },
}
