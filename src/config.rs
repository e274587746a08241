/// Application configuration
///
/// Loaded once at startup from a JSON file. Every field is optional in the
/// file; missing ones take their default. A missing file means "all
/// defaults" and is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;
use crate::state::card::Proportions;

/// Environment variable that overrides the config file location
pub const CONFIG_ENV: &str = "THIRTY_DAYS_CONFIG";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding one image per idea (e.g. `creative.jpg`)
    pub assets_dir: PathBuf,
    /// Card size in logical pixels
    pub card_width: f32,
    pub card_height: f32,
    /// Expand/collapse animation length in milliseconds
    pub animation_ms: u64,
    /// Image share of the card height while collapsed
    pub collapsed_image_share: f32,
    /// Image share of the card height while expanded
    pub expanded_image_share: f32,
}

impl Default for AppConfig {
    fn default() -> Self {
        let proportions = Proportions::default();
        Self {
            assets_dir: default_assets_dir(),
            card_width: 500.0,
            card_height: 400.0,
            animation_ms: 250,
            collapsed_image_share: proportions.collapsed_image_share,
            expanded_image_share: proportions.expanded_image_share,
        }
    }
}

/// `<data_dir>/thirty-days/images`, or `./assets/images` without a data dir
fn default_assets_dir() -> PathBuf {
    match dirs::data_dir() {
        Some(mut path) => {
            path.push("thirty-days");
            path.push("images");
            path
        }
        None => PathBuf::from("assets").join("images"),
    }
}

impl AppConfig {
    /// Where the config file is expected
    ///
    /// `$THIRTY_DAYS_CONFIG` wins; otherwise:
    /// - Linux: ~/.config/thirty-days/config.json
    /// - macOS: ~/Library/Application Support/thirty-days/config.json
    /// - Windows: %APPDATA%\thirty-days\config.json
    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }

        dirs::config_dir().map(|mut path| {
            path.push("thirty-days");
            path.push("config.json");
            path
        })
    }

    /// Load and validate the file at `path`; a missing file gives defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("No config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::from_json(&json).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;

        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load from `default_path()`, falling back to defaults on any error
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            tracing::warn!("Could not determine config directory, using defaults");
            return Self::default();
        };

        Self::load(&path).unwrap_or_else(|err| {
            tracing::warn!("{}; using defaults", err);
            Self::default()
        })
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let collapsed = self.collapsed_image_share;
        let expanded = self.expanded_image_share;
        if !(0.0 < expanded && expanded < collapsed && collapsed < 1.0) {
            return Err(ConfigError::InvalidShares { collapsed, expanded });
        }

        if !(self.card_width > 0.0 && self.card_height > 0.0) {
            return Err(ConfigError::InvalidCardSize {
                width: self.card_width,
                height: self.card_height,
            });
        }

        Ok(())
    }

    pub fn proportions(&self) -> Proportions {
        Proportions {
            collapsed_image_share: self.collapsed_image_share,
            expanded_image_share: self.expanded_image_share,
        }
    }

    pub fn animation(&self) -> Duration {
        Duration::from_millis(self.animation_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.collapsed_image_share > config.expanded_image_share);
        assert_eq!(config.animation(), Duration::from_millis(250));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = AppConfig::from_json(r#"{ "animation_ms": 400, "card_width": 320.0 }"#).unwrap();
        assert_eq!(config.animation_ms, 400);
        assert_eq!(config.card_width, 320.0);
        assert_eq!(config.card_height, 400.0);
        assert_eq!(config.proportions(), Proportions::default());
    }

    #[test]
    fn test_inverted_shares_rejected() {
        let config = AppConfig {
            collapsed_image_share: 0.3,
            expanded_image_share: 0.6,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidShares { .. })
        ));
    }

    #[test]
    fn test_zero_card_size_rejected() {
        let config = AppConfig {
            card_height: 0.0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidCardSize { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "assets_dir": "/tmp/ideas", "expanded_image_share": 0.5 }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.assets_dir, PathBuf::from("/tmp/ideas"));
        assert_eq!(config.expanded_image_share, 0.5);
        assert_eq!(config.collapsed_image_share, 0.7);
    }

    #[test]
    fn test_load_reports_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "collapsed_image_share": 1.5 }"#).unwrap();

        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::InvalidShares { .. })
        ));
    }
}
