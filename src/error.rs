// Error types for certradar
//
// Structured error types using thiserror for the configuration and data
// boundaries; the rest of the crate uses the anyhow-based Result alias
// from lib.rs.

use std::io;
use thiserror::Error;

/// Main error type for certradar operations
#[derive(Debug, Error)]
pub enum RadarError {
    /// Invalid alert configuration, naming the offending field
    #[error("Invalid configuration: {field} {message}")]
    Configuration { field: &'static str, message: String },

    /// Malformed certificate record, naming the offending field
    #[error("Invalid certificate data: {field} of certificate {id} {message}")]
    Data {
        id: u32,
        field: &'static str,
        message: String,
    },

    /// File system errors with path context
    #[error("File system error: {path}: {source}")]
    FileSystem {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Generic I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML settings parse errors
    #[error("Settings parse error: {0}")]
    SettingsParse(#[from] toml::de::Error),

    /// TOML settings encode errors
    #[error("Settings encode error: {0}")]
    SettingsEncode(#[from] toml::ser::Error),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl From<csv::Error> for RadarError {
    fn from(err: csv::Error) -> Self {
        RadarError::Other(format!("CSV error: {}", err))
    }
}
