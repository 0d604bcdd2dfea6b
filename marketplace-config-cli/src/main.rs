//! CLI entrypoint for `marketplace-config`.

use clap::Parser;
use marketplace_config_cli::cli::Args;
use marketplace_config_cli::error::CliError;

fn main() -> Result<(), CliError> {
    let args = Args::parse();
    marketplace_config_cli::init_logging(args.log_level.as_deref())?;
    marketplace_config_cli::run(&args).map(drop)
}
