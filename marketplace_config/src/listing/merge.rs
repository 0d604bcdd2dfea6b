//! Merge hosted listing types and fields with the compiled-in listing defaults.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::{
    ListingField, ListingType, ProcessRegistry, restructure_listing_fields,
    restructure_listing_types, valid_listing_types,
};
use crate::RawRecord;
use crate::hosted::HostedConfig;
use crate::validate::valid_listing_fields;

/// Compiled-in listing configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDefaults {
    /// Listing types always offered alongside the hosted ones.
    #[serde(default)]
    pub listing_types: Vec<ListingType>,
    /// Field records; validated like hosted ones.
    #[serde(default)]
    pub listing_fields: Vec<RawRecord>,
    /// Whether listings with an unknown listing type are rejected.
    #[serde(default)]
    pub enforce_valid_listing_type: bool,
}

/// Validated listing configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingConfig {
    /// Listing types supported by the process registry.
    pub listing_types: Vec<ListingType>,
    /// Extended data fields that passed validation.
    pub listing_fields: Vec<ListingField>,
    /// Copied from the defaults.
    pub enforce_valid_listing_type: bool,
}

/// Combine hosted and default listing configuration and validate the result.
///
/// Hosted listing data is only used when both `listingTypes.listingTypes` and
/// `listingFields.listingFields` are arrays. Listing types are the hosted
/// types followed by the default ones. Default fields take precedence: a
/// hosted field is only added when no default field has its key.
#[must_use]
pub fn merge_listing_config(
    hosted: HostedConfig<'_>,
    defaults: &ListingDefaults,
    registry: &dyn ProcessRegistry,
) -> ListingConfig {
    let (hosted_types, hosted_fields) = match (
        hosted.array(&["listingTypes", "listingTypes"]),
        hosted.array(&["listingFields", "listingFields"]),
    ) {
        (Some(types), Some(fields)) => (
            restructure_listing_types(types).into_iter().flatten().collect(),
            restructure_listing_fields(fields).into_iter().flatten().collect(),
        ),
        _ => (Vec::new(), Vec::new()),
    };

    let listing_types: Vec<ListingType> = hosted_types
        .into_iter()
        .chain(defaults.listing_types.iter().cloned())
        .collect();
    let listing_types_in_use: Vec<String> = listing_types
        .iter()
        .map(|listing_type| listing_type.listing_type.clone())
        .collect();

    let listing_fields = with_hosted_fields(&defaults.listing_fields, hosted_fields);

    ListingConfig {
        listing_fields: valid_listing_fields(&listing_fields, &listing_types_in_use),
        listing_types: valid_listing_types(listing_types, registry),
        enforce_valid_listing_type: defaults.enforce_valid_listing_type,
    }
}

fn field_key(record: &RawRecord) -> Option<&str> {
    record.get("key").and_then(Value::as_str)
}

fn with_hosted_fields(defaults: &[RawRecord], hosted: Vec<RawRecord>) -> Vec<RawRecord> {
    let default_keys: Vec<&str> = defaults.iter().filter_map(field_key).collect();
    let mut fields = defaults.to_vec();
    for field in hosted {
        match field_key(&field) {
            Some(key) if default_keys.contains(&key) => {
                debug!(field = key, "Hosted listing field shadowed by a default field");
            }
            _ => fields.push(field),
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;
    use test_helpers::fixtures;

    use super::*;
    use crate::listing::{SchemaType, SupportedProcesses};

    #[fixture]
    fn defaults() -> ListingDefaults {
        serde_json::from_value(json!({
            "listingTypes": [{
                "listingType": "sell-bikes",
                "label": "Sell bikes",
                "transactionType": {
                    "process": "default-purchase",
                    "alias": "default-purchase/release-1",
                    "unitType": "item"
                },
                "stockType": "oneItem"
            }],
            "listingFields": [{
                "key": "gear",
                "scope": "public",
                "schemaType": "text",
                "showConfig": {"label": "Default gear"}
            }],
            "enforceValidListingType": true
        }))
        .expect("listing defaults deserialise")
    }

    #[rstest]
    fn hosted_types_come_before_default_types(defaults: ListingDefaults) {
        let asset = fixtures::hosted_asset();
        let merged = merge_listing_config(
            HostedConfig::new(&asset),
            &defaults,
            &SupportedProcesses::builtin(),
        );
        let ids: Vec<&str> = merged
            .listing_types
            .iter()
            .map(|lt| lt.listing_type.as_str())
            .collect();
        assert_eq!(ids, vec!["daily-booking", "sell-bikes"]);
        assert!(merged.enforce_valid_listing_type);
    }

    #[rstest]
    fn default_fields_shadow_hosted_fields_with_the_same_key(defaults: ListingDefaults) {
        let asset = fixtures::hosted_asset();
        let merged = merge_listing_config(
            HostedConfig::new(&asset),
            &defaults,
            &SupportedProcesses::builtin(),
        );
        assert_eq!(merged.listing_fields.len(), 1);
        let gear = &merged.listing_fields[0];
        assert_eq!(gear.schema_type, SchemaType::Text);
        assert_eq!(
            gear.include_for_listing_types,
            vec!["daily-booking".to_owned(), "sell-bikes".to_owned()]
        );
    }

    #[rstest]
    fn hosted_listing_data_needs_both_assets(defaults: ListingDefaults) {
        let asset = json!({"listingTypes": {"listingTypes": [fixtures::hosted_listing_type()]}});
        let merged = merge_listing_config(
            HostedConfig::new(&asset),
            &defaults,
            &SupportedProcesses::builtin(),
        );
        let ids: Vec<&str> = merged
            .listing_types
            .iter()
            .map(|lt| lt.listing_type.as_str())
            .collect();
        assert_eq!(ids, vec!["sell-bikes"]);
    }

    #[rstest]
    fn hosted_only_fields_are_validated(defaults: ListingDefaults) {
        let mut field = fixtures::hosted_listing_field();
        field["key"] = json!("frame");
        let asset = json!({
            "listingTypes": {"listingTypes": [fixtures::hosted_listing_type()]},
            "listingFields": {"listingFields": [field]},
        });
        let merged = merge_listing_config(
            HostedConfig::new(&asset),
            &defaults,
            &SupportedProcesses::builtin(),
        );
        let keys: Vec<&str> = merged.listing_fields.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["gear", "frame"]);
        let frame = &merged.listing_fields[1];
        let save = frame.save_config.as_ref().expect("save config kept");
        assert!(save.is_required);
        assert_eq!(save.label.as_deref(), Some("Gear"));
    }
}
