//! The merged application configuration and the top-level merge.

use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::analytics::{AnalyticsConfig, merge_analytics_config};
use crate::branding::{BrandingConfig, merge_branding};
use crate::defaults::DefaultConfig;
use crate::hosted::HostedConfig;
use crate::layout::{LayoutConfig, merge_layouts};
use crate::listing::{ListingConfig, ProcessRegistry, merge_listing_config};
use crate::maps::{MapsConfig, merge_maps_config};
use crate::search::{SearchConfig, merge_search_config};
use crate::transaction::listing_minimum_price;
use crate::RawRecord;

/// Hosted assets the marketplace cannot run properly without, with the
/// property each one must provide.
const MANDATORY_ASSETS: &[(&str, &str)] = &[
    ("branding", "logo"),
    ("listingTypes", "listingTypes"),
    ("listingFields", "listingFields"),
    ("transactionSize", "listingMinimumPrice"),
];

/// Wire names of the properties [`AppConfig`] produces itself. Default
/// settings under these names are not carried through `extra`.
const MERGED_KEYS: &[&str] = &[
    "listingMinimumPriceSubUnits",
    "analytics",
    "branding",
    "layout",
    "listing",
    "search",
    "maps",
    "footer",
    "hasMandatoryConfigurations",
];

/// Validated configuration consumed by the rest of the application.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Default settings no merger handles, carried unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
    /// Listing minimum price in currency subunits.
    pub listing_minimum_price_sub_units: u64,
    /// Analytics identifiers.
    pub analytics: AnalyticsConfig,
    /// Branding.
    pub branding: BrandingConfig,
    /// Layout variants.
    pub layout: LayoutConfig,
    /// Listing types and fields.
    pub listing: ListingConfig,
    /// Search page configuration.
    pub search: SearchConfig,
    /// Map provider settings.
    pub maps: MapsConfig,
    /// Hosted footer, if any; no footer is rendered without it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Value>,
    /// Whether every mandatory hosted asset was present.
    pub has_mandatory_configurations: bool,
}

/// Whether the hosted bundle has every mandatory asset. Each missing asset is
/// logged.
#[must_use]
pub fn has_mandatory_configurations(hosted: HostedConfig<'_>) -> bool {
    MANDATORY_ASSETS
        .iter()
        .map(|&(asset, property)| {
            let present = hosted.provided(&[asset, property]).is_some();
            if !present {
                error!(
                    asset,
                    property,
                    "Mandatory hosted asset is missing; check the asset paths and that the \
                     marketplace has added content"
                );
            }
            present
        })
        .fold(true, |all, present| all && present)
}

/// Merge an untrusted hosted asset bundle with the defaults.
///
/// The merge never fails. Invalid hosted values are dropped with a `tracing`
/// diagnostic and replaced by their defaults; listing types are checked
/// against `registry`. Merging the same inputs twice yields equal results.
///
/// # Examples
///
/// ```
/// use marketplace_config::{DefaultConfig, SupportedProcesses, merge_config};
/// use serde_json::json;
///
/// let defaults = DefaultConfig::builtin()?;
/// let config = merge_config(&json!({}), &defaults, &SupportedProcesses::builtin());
/// assert_eq!(config.listing_minimum_price_sub_units, 500);
/// assert_eq!(config.branding.marketplace_color, "#7c3aed");
/// assert!(config.footer.is_none());
/// # Ok::<_, std::sync::Arc<marketplace_config::ConfigError>>(())
/// ```
#[must_use]
pub fn merge_config(
    hosted_asset: &Value,
    defaults: &DefaultConfig,
    registry: &dyn ProcessRegistry,
) -> AppConfig {
    let hosted = HostedConfig::new(hosted_asset);
    AppConfig {
        extra: defaults
            .extra
            .iter()
            .filter(|(key, _)| !MERGED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        listing_minimum_price_sub_units: listing_minimum_price(
            hosted.section("transactionSize"),
            defaults.listing_minimum_price_sub_units,
        ),
        analytics: merge_analytics_config(hosted.section("analytics"), &defaults.analytics),
        branding: merge_branding(hosted.section("branding"), &defaults.branding),
        layout: merge_layouts(hosted.section("layout"), &defaults.layout),
        listing: merge_listing_config(hosted, &defaults.listing, registry),
        search: merge_search_config(hosted.section("search"), &defaults.search),
        maps: merge_maps_config(hosted.section("maps"), &defaults.maps),
        footer: hosted.get(&["footer"]).cloned(),
        has_mandatory_configurations: has_mandatory_configurations(hosted),
    }
}
