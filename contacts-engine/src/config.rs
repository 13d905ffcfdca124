//! Aggregator configuration, optionally read from a TOML file:
//!
//! ```toml
//! [aggregator]
//! skip_blank_data = true
//! redact = false
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Tunables of one aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregatorConfig {
    /// Drop data rows whose every non-identity field is empty.
    pub skip_blank_data: bool,
    /// Emit redacted copies of every contact.
    pub redact: bool,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            skip_blank_data: true,
            redact: false,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    aggregator: AggregatorConfig,
}

impl AggregatorConfig {
    /// Loads the `[aggregator]` table from `path`. A missing, unreadable or
    /// malformed file falls back to the defaults.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No aggregator config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::try_load_from(path) {
            Ok(config) => {
                info!("Loaded aggregator config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("{}. Falling back to default aggregator config.", e);
                Self::default()
            }
        }
    }

    /// Loads the `[aggregator]` table from `path`, surfacing every failure.
    pub fn try_load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }

    /// Parses the `[aggregator]` table from a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(contents)?;
        Ok(file.aggregator)
    }
}
