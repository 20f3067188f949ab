use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {source}")]
    Parse { source: toml::de::Error },

    #[error("Failed to serialize config: {source}")]
    Serialize { source: toml::ser::Error },

    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Options for the block-level line lexer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockConfig {
    /// Maximum number of nested list/quote containers recognised on one line.
    pub max_nesting: usize,
}

impl Default for BlockConfig {
    fn default() -> Self {
        Self { max_nesting: 32 }
    }
}

/// Options for inline delimiter scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InlineConfig {
    /// Whether `~` runs are scanned as strikethrough delimiters.
    pub strikethrough: bool,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            strikethrough: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub blocks: BlockConfig,
    pub inline: InlineConfig,
}

impl Config {
    /// Parses a config from TOML text. Missing tables and keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|source| ConfigError::Parse { source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|source| ConfigError::Serialize { source })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.blocks.max_nesting == 0 {
            return Err(ConfigError::Invalid {
                field: "blocks.max_nesting",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
