//! Command-line interface definitions for `marketplace-config`.

use camino::Utf8PathBuf;
use clap::Parser;

/// Filter used when neither `--log-level` nor `RUST_LOG` is given.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Parsed CLI arguments for `marketplace-config`.
#[derive(Debug, Clone, Parser)]
#[command(name = "marketplace-config")]
#[command(about = "Merge a hosted marketplace asset bundle with the default configuration")]
#[command(version)]
pub struct Args {
    /// Hosted asset bundle (JSON) to merge.
    #[arg(long, value_name = "path")]
    pub hosted: Utf8PathBuf,
    /// Override file (`.json` or `.toml`) layered over the builtin defaults.
    #[arg(long, value_name = "path")]
    pub defaults: Option<Utf8PathBuf>,
    /// Write the merged configuration here instead of stdout.
    #[arg(long, value_name = "path")]
    pub output: Option<Utf8PathBuf>,
    /// Emit compact JSON instead of pretty-printed JSON.
    #[arg(long = "compact")]
    pub is_compact: bool,
    /// Fail when a mandatory hosted asset is missing. The merged
    /// configuration is still written.
    #[arg(long = "strict")]
    pub is_strict: bool,
    /// Diagnostic filter, e.g. `debug` or `marketplace_config=info`. Falls
    /// back to `RUST_LOG`, then to `warn`.
    #[arg(long, value_name = "filter")]
    pub log_level: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn hosted_path_is_required() {
        assert!(Args::try_parse_from(["marketplace-config"]).is_err());
    }

    #[rstest]
    fn flags_parse() {
        let args = Args::try_parse_from([
            "marketplace-config",
            "--hosted",
            "asset.json",
            "--defaults",
            "overrides.toml",
            "--compact",
            "--strict",
            "--log-level",
            "debug",
        ])
        .expect("arguments parse");
        assert_eq!(args.hosted, "asset.json");
        assert_eq!(args.defaults.as_deref().map(camino::Utf8Path::as_str), Some("overrides.toml"));
        assert!(args.output.is_none());
        assert!(args.is_compact);
        assert!(args.is_strict);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
