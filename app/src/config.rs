use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use terraforge_core::{TerrainSettings, WaterSettings};

// MongoDB location for stored terrain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub uri: String,
    pub database: String,
    pub collection: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uri: "mongodb://localhost:27017".to_string(),
            database: "terraforge".to_string(),
            collection: "terrain".to_string(),
        }
    }
}

// Top-level configuration file. Missing tables fall back to defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub terrain: TerrainSettings,
    pub water: WaterSettings,
    pub storage: StorageConfig,
}

impl WorldConfig {
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("invalid world config")?;
        config.terrain.validate().context("invalid [terrain] settings")?;
        config.water.validate().context("invalid [water] settings")?;
        Ok(config)
    }

    // Reads `path`, or returns the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }
}
