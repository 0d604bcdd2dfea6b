//! Library interface for the `marketplace-config` command.
//!
//! The command reads a hosted asset bundle, layers an optional override file
//! over the builtin defaults, merges the two with [`marketplace_config`] and
//! writes the normalized configuration as JSON. Diagnostics from the merge go
//! to stderr through `tracing-subscriber`.

pub mod cli;
pub mod error;
pub mod output;

use marketplace_config::{AppConfig, SupportedProcesses, load_defaults, merge_config, read_hosted_asset};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, DEFAULT_LOG_FILTER};
use crate::error::CliError;

/// Build the diagnostic filter: `--log-level`, then `RUST_LOG`, then
/// [`DEFAULT_LOG_FILTER`].
///
/// # Errors
///
/// Returns [`CliError::Logging`] if `--log-level` is not a valid filter.
pub fn log_filter(log_level: Option<&str>) -> Result<EnvFilter, CliError> {
    match log_level {
        Some(directives) => {
            EnvFilter::try_new(directives).map_err(|err| CliError::Logging(err.to_string()))
        }
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))),
    }
}

/// Install the stderr `fmt` subscriber.
///
/// # Errors
///
/// Returns [`CliError::Logging`] if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_logging(log_level: Option<&str>) -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level)?)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// Load the inputs, merge them and write the result.
///
/// Returns the merged configuration once it has been written.
///
/// # Errors
///
/// Returns an error if an input cannot be loaded or the output cannot be
/// written. With `--strict`, a bundle missing mandatory assets yields
/// [`CliError::MissingMandatory`] after the output is written.
pub fn run(args: &Args) -> Result<AppConfig, CliError> {
    let defaults = load_defaults(args.defaults.as_deref())?;
    let hosted = read_hosted_asset(&args.hosted)?;
    let config = merge_config(&hosted, &defaults, &SupportedProcesses::builtin());
    info!(
        hosted = %args.hosted,
        listing_types = config.listing.listing_types.len(),
        listing_fields = config.listing.listing_fields.len(),
        "Merged hosted configuration"
    );

    let rendered = output::render(&config, args.is_compact)?;
    output::write_output(args.output.as_deref(), &rendered)?;

    if args.is_strict && !config.has_mandatory_configurations {
        return Err(CliError::MissingMandatory);
    }
    Ok(config)
}
