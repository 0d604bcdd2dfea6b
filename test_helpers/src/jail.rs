//! Run tests against configuration files inside a `figment::Jail`.
//!
//! The jail switches into a fresh temporary directory for the duration of the
//! closure, so tests can write hosted assets and default overrides with
//! relative paths and have them cleaned up afterwards.

use anyhow::{Result, anyhow};

/// Write each `(name, contents)` pair into a jail, then run `f` inside it.
///
/// # Errors
///
/// Returns an error if the jail cannot be created, a file cannot be written,
/// or the closure returns a [`figment::Error`].
///
/// # Examples
///
/// ```
/// use marketplace_config_test_helpers::jail::with_files;
///
/// let text = with_files(&[("hosted.json", "{}")], |_| {
///     Ok(std::fs::read_to_string("hosted.json").map_err(|e| e.to_string())?)
/// })?;
/// assert_eq!(text, "{}");
/// # Ok::<_, anyhow::Error>(())
/// ```
#[allow(deprecated, reason = "figment::Jail is used for test isolation only")]
pub fn with_files<F, T>(files: &[(&str, &str)], f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        for (name, contents) in files {
            jail.create_file(name, contents)?;
        }
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Convert any displayable error into a [`figment::Error`] so it can be
/// returned from a jail closure with `?`.
pub fn jail_error<E: ToString>(err: &E) -> figment::Error {
    figment::Error::from(err.to_string())
}
