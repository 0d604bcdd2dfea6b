//! Constructors for `ConfigError`.

use std::sync::Arc;

use camino::Utf8Path;
use figment::Error as FigmentError;

use super::ConfigError;

impl ConfigError {
    /// Construct a file error for `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_config::ConfigError;
    /// let err = ConfigError::file("hosted.json", std::io::Error::other("boom"));
    /// assert!(matches!(err, ConfigError::File { .. }));
    /// ```
    #[must_use]
    pub fn file(path: impl AsRef<Utf8Path>, source: std::io::Error) -> Self {
        Self::File {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Construct a defaults error from a [`figment::Error`].
    #[must_use]
    pub fn defaults(source: FigmentError) -> Self {
        Self::Defaults(Box::new(source))
    }

    /// Construct a file error already wrapped in an [`Arc`].
    #[must_use]
    pub fn file_arc(path: impl AsRef<Utf8Path>, source: std::io::Error) -> Arc<Self> {
        Arc::new(Self::file(path, source))
    }
}
