//! Error types for `marketplace-config`.

use std::sync::Arc;

use camino::Utf8PathBuf;
use marketplace_config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the `marketplace-config` pipeline.
#[derive(Debug, Error)]
pub enum CliError {
    /// Loading the defaults or reading the hosted asset failed.
    #[error(transparent)]
    Config(#[from] Arc<ConfigError>),

    /// The merged configuration could not be encoded.
    #[error("failed to encode merged configuration: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// Destination being written.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The diagnostic filter or subscriber could not be set up.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// `--strict` was given and the hosted bundle lacks mandatory assets.
    #[error("hosted asset bundle is missing mandatory configuration; see the logged errors")]
    MissingMandatory,
}
