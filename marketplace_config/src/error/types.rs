//! Primary error enum for configuration loading flows.

use camino::Utf8PathBuf;
use figment::Error as FigmentError;
use thiserror::Error;

/// Errors that can occur while loading the defaults or a hosted asset.
///
/// The merge itself never fails; these only cover reading and decoding the
/// inputs handed to it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// Error reading a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A file that was explicitly requested does not exist.
    #[error("Configuration file '{0}' does not exist")]
    MissingFile(Utf8PathBuf),

    /// The file extension does not map to a supported format.
    #[error("Unsupported configuration format for '{path}': expected .json or .toml")]
    UnsupportedFormat {
        /// Path with the unsupported extension.
        path: Utf8PathBuf,
    },

    /// A JSON document could not be decoded.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The layered default configuration could not be extracted.
    #[error("Failed to build default configuration: {0}")]
    Defaults(#[from] Box<FigmentError>),
}
