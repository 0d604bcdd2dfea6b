//! Output writers for `marketplace-config`.

use std::io::Write;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use marketplace_config::AppConfig;

use crate::error::CliError;

/// Encode the merged configuration as pretty or compact JSON, newline
/// terminated.
///
/// # Errors
///
/// Returns [`CliError::Serialize`] if encoding fails.
pub fn render(config: &AppConfig, is_compact: bool) -> Result<String, CliError> {
    let mut rendered = if is_compact {
        serde_json::to_string(config)?
    } else {
        serde_json::to_string_pretty(config)?
    };
    rendered.push('\n');
    Ok(rendered)
}

/// Write `content` to `path`, creating its parent directory if needed, or to
/// stdout when no path is given.
///
/// # Errors
///
/// Returns [`CliError::Io`] if the destination cannot be written.
pub fn write_output(path: Option<&Utf8Path>, content: &str) -> Result<(), CliError> {
    let Some(target) = path else {
        return std::io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .map_err(|source| CliError::Io {
                path: "<stdout>".into(),
                source,
            });
    };
    let io_error = |source| CliError::Io {
        path: target.to_path_buf(),
        source,
    };
    let file_name = target.file_name().ok_or_else(|| {
        io_error(std::io::Error::other("output path does not name a file"))
    })?;
    let dir = ensure_dir(parent_or_dot(target))?;
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(io_error)?;
    file.write_all(content.as_bytes()).map_err(io_error)
}

fn parent_or_dot(path: &Utf8Path) -> &Utf8Path {
    path.parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."))
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(io_error)?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(io_error)
        }
        Err(open_err) => Err(io_error(open_err)),
    }
}

#[cfg(test)]
mod tests {
    use marketplace_config::{DefaultConfig, SupportedProcesses, merge_config};
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(true)]
    #[case(false)]
    fn rendered_output_is_a_single_json_document(#[case] is_compact: bool) {
        let defaults = DefaultConfig::builtin().expect("embedded defaults parse");
        let config = merge_config(&json!({}), &defaults, &SupportedProcesses::builtin());
        let rendered = render(&config, is_compact).expect("renders");
        assert!(rendered.ends_with('\n'));
        assert_eq!(rendered.trim_end().lines().count() == 1, is_compact);
        let parsed: serde_json::Value = serde_json::from_str(&rendered).expect("valid JSON");
        assert_eq!(parsed.get("listingMinimumPriceSubUnits"), Some(&json!(500)));
    }

    #[rstest]
    #[case("merged.json", ".")]
    #[case("out/merged.json", "out")]
    fn output_parent_defaults_to_the_working_directory(#[case] path: &str, #[case] parent: &str) {
        assert_eq!(parent_or_dot(Utf8Path::new(path)), Utf8Path::new(parent));
    }
}
