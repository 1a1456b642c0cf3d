use std::path::Path;

use crate::ai::Tier;
use crate::error::ConfigError;
use crate::game::Variant;

/// Match runner configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Which game to play.
    pub variant: Variant,
    /// Strategy tier for player 1.
    pub p1_tier: Tier,
    /// Strategy tier for player 2.
    pub p2_tier: Tier,
    /// Number of games in the series.
    pub games: usize,
    /// Seed for reproducible matches; OS entropy when absent.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            variant: Variant::ConnectFour,
            p1_tier: Tier::Search,
            p2_tier: Tier::Search,
            games: 1,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: MatchConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.games == 0 {
            return Err(ConfigError::Validation("games must be > 0".into()));
        }
        Ok(())
    }
}
