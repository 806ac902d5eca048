use std::path::PathBuf;

use thiserror::Error;

/// Errors from the layers around the scan. Parsing itself never fails.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read config file at {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid color {0:?}: expected #rrggbb")]
    InvalidColor(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
