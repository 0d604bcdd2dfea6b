//! Loading entrypoints for the default configuration and hosted assets.
//!
//! The builtin defaults form the base [`Figment`] layer; an optional override
//! file is merged over it, so objects merge key by key and any other value
//! (arrays included) is replaced. Files are read through `cap-std`.

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8::Dir};
use figment::Figment;
use figment::providers::{Format, Json, Toml};
use serde_json::Value;

use crate::defaults::BUILTIN_DEFAULTS;
use crate::result_ext::ConfigDefaultsExt;
use crate::{ConfigError, ConfigResult, ConfigResultExt, DefaultConfig};

/// Return the parent directory of `path`, falling back to `"."` when the path
/// has no parent or the parent is empty.
fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

/// Read `path` as UTF-8 text.
///
/// A missing file is reported as [`ConfigError::MissingFile`]; other I/O
/// failures as [`ConfigError::File`].
fn read_text(path: &Utf8Path) -> ConfigResult<String> {
    let read = || -> std::io::Result<String> {
        let file_name = path.file_name().ok_or_else(|| {
            std::io::Error::other("cannot determine file name for configuration file path")
        })?;
        let dir = Dir::open_ambient_dir(parent_or_dot(path), ambient_authority())?;
        dir.read_to_string(file_name)
    };
    read().map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            std::sync::Arc::new(ConfigError::MissingFile(path.to_path_buf()))
        } else {
            ConfigError::file_arc(path, err)
        }
    })
}

/// Build the defaults figment: the builtin document, then `overrides` if
/// given.
///
/// # Errors
///
/// Returns an error if the override file cannot be read or has an extension
/// other than `.json` or `.toml`.
pub fn defaults_figment(overrides: Option<&Utf8Path>) -> ConfigResult<Figment> {
    let base = Figment::from(Json::string(BUILTIN_DEFAULTS));
    let Some(path) = overrides else {
        return Ok(base);
    };
    let text = read_text(path)?;
    match path.extension().map(str::to_ascii_lowercase).as_deref() {
        Some("json") => Ok(base.merge(Json::string(&text))),
        Some("toml") => Ok(base.merge(Toml::string(&text))),
        _ => Err(std::sync::Arc::new(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        })),
    }
}

/// Load the default configuration, layering `overrides` over the builtin
/// defaults.
///
/// # Examples
///
/// ```
/// let defaults = marketplace_config::load_defaults(None)?;
/// assert_eq!(defaults, marketplace_config::DefaultConfig::builtin()?);
/// # Ok::<_, std::sync::Arc<marketplace_config::ConfigError>>(())
/// ```
///
/// # Errors
///
/// Returns an error if the override file cannot be read, has an unsupported
/// extension, or produces a document that no longer matches
/// [`DefaultConfig`].
pub fn load_defaults(overrides: Option<&Utf8Path>) -> ConfigResult<DefaultConfig> {
    defaults_figment(overrides)?.extract().into_config_defaults()
}

/// Read and parse a hosted asset bundle.
///
/// The document is returned as untrusted JSON; any shape is accepted.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn read_hosted_asset(path: &Utf8Path) -> ConfigResult<Value> {
    let text = read_text(path)?;
    serde_json::from_str(&text).into_config()
}
