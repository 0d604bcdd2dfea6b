//! Behavioural properties of the top-level merge.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface configuration mistakes"
)]

use marketplace_config::layout::SearchPageVariant;
use marketplace_config::search::DefaultFilter;
use marketplace_config::{
    AppConfig, DefaultConfig, ProcessInfo, SupportedProcesses, merge_config,
};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use test_helpers::{fixtures, logs};

#[fixture]
fn defaults() -> DefaultConfig {
    DefaultConfig::builtin().expect("embedded defaults parse")
}

fn merge(hosted: &Value, defaults: &DefaultConfig) -> AppConfig {
    merge_config(hosted, defaults, &SupportedProcesses::builtin())
}

fn field_keys(config: &AppConfig) -> Vec<&str> {
    config
        .listing
        .listing_fields
        .iter()
        .map(|field| field.key.as_str())
        .collect()
}

#[rstest]
#[case(fixtures::hosted_asset())]
#[case(json!({}))]
#[case(json!({"branding": {"marketplaceColors": {"mainColor": "#zz"}}, "layout": "grid"}))]
fn merging_is_idempotent(defaults: DefaultConfig, #[case] hosted: Value) {
    let first = merge(&hosted, &defaults);
    let second = merge(&hosted, &defaults);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_value(&first).expect("serialises"),
        serde_json::to_value(&second).expect("serialises")
    );
}

#[rstest]
fn an_empty_bundle_falls_back_to_every_default(defaults: DefaultConfig) {
    let config = merge(&json!({}), &defaults);
    assert_eq!(config.listing_minimum_price_sub_units, 500);
    assert_eq!(config.branding.marketplace_color, "#7c3aed");
    assert!(config.branding.marketplace_color_dark.is_some());
    assert!(config.branding.logo_image_desktop.is_some());
    assert_eq!(config.layout.search_page.variant_type, SearchPageVariant::Grid);
    assert_eq!(config.listing.listing_types.len(), 3);
    assert_eq!(field_keys(&config), vec!["listingType", "category", "subcategory"]);
    assert_eq!(config.search.default_filters.len(), 3);
    assert!(config.search.sort_config.active);
    assert_eq!(config.maps, defaults.maps);
    assert!(!config.has_mandatory_configurations);

    let wire = serde_json::to_value(&config).expect("serialises");
    assert_eq!(wire.get("marketplaceName"), defaults.extra.get("marketplaceName"));
    assert!(wire.get("footer").is_none());
}

#[rstest]
fn fields_sharing_a_key_are_all_dropped(mut defaults: DefaultConfig) {
    let duplicate = json!({"key": "category", "scope": "public", "schemaType": "text"})
        .as_object()
        .cloned()
        .expect("object");
    defaults.listing.listing_fields.push(duplicate);
    let (config, captured) = logs::capture(|| merge(&json!({}), &defaults));
    assert_eq!(field_keys(&config), vec!["listingType", "subcategory"]);
    assert!(captured.any_field_contains("field", "category"));
}

#[rstest]
#[case(json!({"min": 10, "max": 5}), None)]
#[case(json!({"min": 0, "max": 1000, "step": 5}), Some(json!({"min": 0, "max": 1000, "step": 5})))]
fn price_filter_boundaries(
    defaults: DefaultConfig,
    #[case] range: Value,
    #[case] expected: Option<Value>,
) {
    let mut price_filter = range.as_object().cloned().expect("object");
    price_filter.insert("schemaType".to_owned(), json!("price"));
    price_filter.insert("enabled".to_owned(), json!(true));
    let hosted = json!({"search": {"mainSearch": {"searchType": "keywords"}, "priceFilter": price_filter}});
    let config = merge(&hosted, &defaults);
    let price = config.search.default_filters.iter().find_map(|filter| match filter {
        DefaultFilter::Price(price) => Some(json!({"min": price.min, "max": price.max, "step": price.step})),
        _ => None,
    });
    assert_eq!(price, expected);
}

#[rstest]
fn listing_type_memberships_are_checked_independently(defaults: DefaultConfig) {
    let registry = SupportedProcesses::new(vec![
        ProcessInfo {
            name: "default-booking".to_owned(),
            alias: "other/release-1".to_owned(),
            unit_types: vec!["hour".to_owned()],
        },
        ProcessInfo {
            name: "other".to_owned(),
            alias: "default-booking/release-1".to_owned(),
            unit_types: vec!["night".to_owned()],
        },
        ProcessInfo {
            name: "third".to_owned(),
            alias: "third/release-1".to_owned(),
            unit_types: vec!["day".to_owned()],
        },
    ]);
    let hosted = fixtures::hosted_asset();
    let config = merge_config(&hosted, &defaults, &registry);
    let ids: Vec<&str> = config
        .listing
        .listing_types
        .iter()
        .map(|lt| lt.listing_type.as_str())
        .collect();
    assert_eq!(ids, vec!["daily-booking"]);

    let without_day = SupportedProcesses::new(vec![ProcessInfo::release_1("default-booking", &["night"])]);
    let narrowed = merge_config(&hosted, &defaults, &without_day);
    assert!(narrowed.listing.listing_types.is_empty());
}

#[rstest]
fn derived_colours_are_twenty_points_apart(defaults: DefaultConfig) {
    let hosted = json!({"branding": {"marketplaceColors": {"mainColor": "#FF0000"}}});
    let config = merge(&hosted, &defaults);
    assert_eq!(config.branding.marketplace_color_dark.as_deref(), Some("hsl(0, 100%, 40%)"));
    assert_eq!(config.branding.marketplace_color_light.as_deref(), Some("hsl(0, 100%, 60%)"));
}

#[rstest]
fn omitted_search_page_layout_uses_the_default_variant(defaults: DefaultConfig) {
    let hosted = json!({"layout": {"listingPage": {"variantType": "coverPhoto"}}});
    let config = merge(&hosted, &defaults);
    assert_eq!(config.layout.search_page.variant_type, SearchPageVariant::Grid);
}

#[rstest]
fn invalid_filter_type_drops_the_field(mut defaults: DefaultConfig) {
    defaults.listing.listing_fields.retain(|field| field.get("key") != Some(&json!("category")));
    let hosted = json!({
        "listingTypes": {"listingTypes": [fixtures::hosted_listing_type()]},
        "listingFields": {"listingFields": [
            {"key": "category", "schemaType": "enum", "filterConfig": {"filterType": "BadType"}}
        ]}
    });
    let (config, captured) = logs::capture(|| merge(&hosted, &defaults));
    assert!(!field_keys(&config).contains(&"category"));
    assert!(captured.any_field_contains("property", "filterConfig"));
    assert!(captured.any_field_contains("field", "category"));
}
