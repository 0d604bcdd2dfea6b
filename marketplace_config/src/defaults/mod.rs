//! Compiled-in default configuration.
//!
//! The defaults are trusted: they are the fallback for every hosted value and
//! are expected to be complete. They ship as an embedded JSON document so that
//! overrides (see [`crate::load_defaults`]) can be layered over the same
//! shape.

use serde::{Deserialize, Serialize};

use crate::analytics::AnalyticsConfig;
use crate::branding::BrandingDefaults;
use crate::layout::LayoutDefaults;
use crate::listing::ListingDefaults;
use crate::maps::MapsConfig;
use crate::{ConfigResult, ConfigResultExt, RawRecord};

/// The embedded default configuration document.
pub const BUILTIN_DEFAULTS: &str = include_str!("marketplace.json");

/// Default values for every configuration domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultConfig {
    /// Listing minimum price used when the hosted one is missing or invalid.
    pub listing_minimum_price_sub_units: u64,
    /// Analytics identifiers.
    #[serde(default)]
    pub analytics: AnalyticsConfig,
    /// Branding.
    pub branding: BrandingDefaults,
    /// Layout variants.
    #[serde(default)]
    pub layout: LayoutDefaults,
    /// Listing types and fields.
    #[serde(default)]
    pub listing: ListingDefaults,
    /// Search configuration, validated like the hosted one.
    #[serde(default)]
    pub search: RawRecord,
    /// Map provider settings.
    pub maps: MapsConfig,
    /// Settings no merger handles (marketplace name, currency...), carried
    /// into the merged configuration unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
}

impl DefaultConfig {
    /// Parse the embedded defaults.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ConfigError::Json`] if the embedded document does not
    /// match [`DefaultConfig`].
    pub fn builtin() -> ConfigResult<Self> {
        serde_json::from_str(BUILTIN_DEFAULTS).into_config()
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::layout::{SearchPageVariant, merge_layouts};
    use crate::listing::{SupportedProcesses, valid_listing_types};
    use crate::validate::valid_listing_fields;
    use crate::HostedConfig;

    #[rstest]
    fn builtin_defaults_parse() {
        let defaults = DefaultConfig::builtin().expect("embedded defaults parse");
        assert_eq!(defaults.listing_minimum_price_sub_units, 500);
        assert!(defaults.extra.contains_key("marketplaceName"));
        assert!(!defaults.extra.contains_key("branding"));
    }

    #[rstest]
    fn builtin_listing_types_are_all_supported() {
        let defaults = DefaultConfig::builtin().expect("embedded defaults parse");
        let types = defaults.listing.listing_types.clone();
        let kept = valid_listing_types(types, &SupportedProcesses::builtin());
        assert_eq!(kept.len(), defaults.listing.listing_types.len());
    }

    #[rstest]
    fn builtin_listing_fields_all_validate() {
        let defaults = DefaultConfig::builtin().expect("embedded defaults parse");
        let in_use: Vec<String> = defaults
            .listing
            .listing_types
            .iter()
            .map(|lt| lt.listing_type.clone())
            .collect();
        let fields = valid_listing_fields(&defaults.listing.listing_fields, &in_use);
        assert_eq!(fields.len(), defaults.listing.listing_fields.len());
    }

    #[rstest]
    fn builtin_layout_is_usable() {
        let defaults = DefaultConfig::builtin().expect("embedded defaults parse");
        let layout = merge_layouts(HostedConfig::default(), &defaults.layout);
        assert_eq!(layout.search_page.variant_type, SearchPageVariant::Grid);
        assert_eq!(layout.listing_image.variant_prefix, "listing-card");
    }
}
