//! End-to-end runs of the `marketplace-config` pipeline against files on disk.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use anyhow::{Result, bail, ensure};
use clap::Parser;
use marketplace_config::ConfigError;
use marketplace_config_cli::cli::Args;
use marketplace_config_cli::error::CliError;
use marketplace_config_cli::{log_filter, run};
use rstest::rstest;
use serde_json::{Value, json};
use test_helpers::fixtures;
use test_helpers::jail::{jail_error, with_files};

fn args(extra: &[&str]) -> Args {
    let base = ["marketplace-config", "--hosted", "hosted.json"];
    Args::try_parse_from(base.iter().chain(extra).copied()).expect("arguments parse")
}

fn read_json(path: &str) -> std::result::Result<Value, figment::Error> {
    let text = std::fs::read_to_string(path).map_err(|err| jail_error(&err))?;
    serde_json::from_str(&text).map_err(|err| jail_error(&err))
}

#[rstest]
fn merged_configuration_is_written_to_the_output_file() -> Result<()> {
    let hosted = fixtures::hosted_asset().to_string();
    let written = with_files(&[("hosted.json", hosted.as_str())], |_| {
        run(&args(&["--output", "out/merged.json"])).map_err(|err| jail_error(&err))?;
        read_json("out/merged.json")
    })?;
    ensure!(written.get("hasMandatoryConfigurations") == Some(&json!(true)));
    ensure!(written.pointer("/maps/mapProvider") == Some(&json!("googleMaps")));
    Ok(())
}

#[rstest]
fn defaults_overrides_reach_the_output() -> Result<()> {
    let overrides = "listingMinimumPriceSubUnits = 900\nmarketplaceName = \"Toolshed\"\n";
    let written = with_files(
        &[("hosted.json", "{}"), ("overrides.toml", overrides)],
        |_| {
            run(&args(&["--defaults", "overrides.toml", "--output", "merged.json", "--compact"]))
                .map_err(|err| jail_error(&err))?;
            read_json("merged.json")
        },
    )?;
    ensure!(written.get("listingMinimumPriceSubUnits") == Some(&json!(900)));
    ensure!(written.get("marketplaceName") == Some(&json!("Toolshed")));
    Ok(())
}

#[rstest]
fn strict_mode_fails_after_writing_incomplete_bundles() -> Result<()> {
    let (outcome, written) = with_files(&[("hosted.json", "{}")], |_| {
        let outcome = run(&args(&["--strict", "--output", "merged.json"]));
        Ok((outcome, read_json("merged.json")?))
    })?;
    let Err(err) = outcome else {
        bail!("--strict must reject a bundle without mandatory assets");
    };
    ensure!(matches!(err, CliError::MissingMandatory));
    ensure!(written.get("hasMandatoryConfigurations") == Some(&json!(false)));
    Ok(())
}

#[rstest]
fn missing_hosted_asset_is_a_config_error() -> Result<()> {
    let outcome = with_files(&[], |_| Ok(run(&args(&[]))))?;
    let Err(CliError::Config(err)) = outcome else {
        bail!("a missing hosted asset must fail to load");
    };
    ensure!(matches!(err.as_ref(), ConfigError::MissingFile(_)));
    Ok(())
}

#[rstest]
#[case("warn")]
#[case("marketplace_config=debug")]
fn valid_log_filters_are_accepted(#[case] directives: &str) {
    assert!(log_filter(Some(directives)).is_ok());
}

#[rstest]
fn invalid_log_filters_are_rejected() {
    assert!(matches!(
        log_filter(Some("marketplace_config=loud")),
        Err(CliError::Logging(_))
    ));
}
