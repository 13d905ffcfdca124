//! Error types for the aggregation engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading an [`AggregatorConfig`](crate::AggregatorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
