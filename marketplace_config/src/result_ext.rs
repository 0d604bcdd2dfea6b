//! Conversions from parser and loader errors into shared `ConfigError`s.
//!
//! The loaders read defaults overrides through `figment` and hosted assets
//! through `serde_json`. Both end up as an `Arc<ConfigError>` so callers can
//! clone and log one failure without re-wrapping it at every `?`.
//!
//! # Examples
//!
//! ```
//! use marketplace_config::{ConfigResult, ConfigResultExt};
//!
//! fn parse() -> ConfigResult<serde_json::Value> {
//!     serde_json::from_str("{\"branding\": {}}").into_config()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{ConfigError, ConfigResult};

/// Turns any error convertible into [`ConfigError`] into a shared one.
pub trait ConfigResultExt<T, E> {
    /// Wrap the error, if any, as an `Arc<ConfigError>`.
    ///
    /// # Errors
    ///
    /// Returns the converted error when `self` is `Err`.
    fn into_config(self) -> ConfigResult<T>;
}

impl<T, E> ConfigResultExt<T, E> for Result<T, E>
where
    E: Into<ConfigError>,
{
    fn into_config(self) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}

/// Reports a failed defaults extraction as [`ConfigError::Defaults`].
pub(crate) trait ConfigDefaultsExt<T> {
    /// Wrap a `figment` failure as a defaults error.
    fn into_config_defaults(self) -> ConfigResult<T>;
}

impl<T> ConfigDefaultsExt<T> for Result<T, figment::Error> {
    fn into_config_defaults(self) -> ConfigResult<T> {
        self.map_err(|e| Arc::new(ConfigError::defaults(e)))
    }
}
