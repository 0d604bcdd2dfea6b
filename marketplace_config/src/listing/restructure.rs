//! Reshape hosted listing records into the canonical listing shape.
//!
//! Hosted assets describe a listing type with a flat `transactionProcess`
//! object and a sibling `unitType`, and describe fields with a single `label`
//! shared by every block. Both are reshaped here before validation. Records
//! that cannot be reshaped become `None` placeholders; callers flatten them
//! out before use.

use serde_json::Value;
use tracing::debug;

use super::{ListingType, SchemaType, StockType, TransactionType};
use crate::RawRecord;
use crate::validate::{ClosedSet, present};

const LISTING_TYPE_KEYS: &[&str] = &["id", "label", "transactionProcess", "unitType", "stockType"];
const LISTING_FIELD_KEYS: &[&str] = &[
    "key",
    "scope",
    "schemaType",
    "enumOptions",
    "label",
    "filterConfig",
    "showConfig",
    "saveConfig",
];

/// Reshape hosted listing types.
///
/// The output has one entry per input; entries without a usable transaction
/// process (or id, alias or unit type) are `None`.
///
/// # Examples
///
/// ```
/// use marketplace_config::listing::restructure_listing_types;
/// use serde_json::json;
///
/// let hosted = vec![
///     json!({
///         "id": "daily-booking",
///         "transactionProcess": {"name": "default-booking", "alias": "default-booking/release-1"},
///         "unitType": "day"
///     }),
///     json!({"id": "orphan", "unitType": "day"}),
/// ];
/// let restructured = restructure_listing_types(&hosted);
/// assert_eq!(restructured.len(), 2);
/// let daily = restructured[0].as_ref().expect("first record reshapes");
/// assert_eq!(daily.transaction_type.process, "default-booking");
/// assert!(restructured[1].is_none());
/// ```
#[must_use]
pub fn restructure_listing_types(hosted: &[Value]) -> Vec<Option<ListingType>> {
    hosted
        .iter()
        .map(|record| {
            let restructured = record.as_object().and_then(restructure_listing_type);
            if restructured.is_none() {
                debug!(record = %record, "Hosted listing type lacks a transaction process; skipped");
            }
            restructured
        })
        .collect()
}

fn restructure_listing_type(record: &RawRecord) -> Option<ListingType> {
    let process = present(record.get("transactionProcess"))?.as_object()?;
    let stock_type = match present(record.get("stockType")) {
        None => None,
        Some(value) => Some(StockType::from_wire(value.as_str()?)?),
    };
    Some(ListingType {
        listing_type: record.get("id")?.as_str()?.to_owned(),
        label: record.get("label").and_then(Value::as_str).map(str::to_owned),
        transaction_type: TransactionType {
            process: process.get("name")?.as_str()?.to_owned(),
            alias: process.get("alias")?.as_str()?.to_owned(),
            unit_type: record.get("unitType")?.as_str()?.to_owned(),
            extra: RawRecord::new(),
        },
        stock_type,
        extra: rest_of(record, LISTING_TYPE_KEYS),
    })
}

/// Reshape hosted listing fields into raw canonical records.
///
/// The field `label` becomes the default label of the filter, show and save
/// blocks, falling back to the key. `saveConfig.required` is renamed to
/// `isRequired`, and `enumOptions` are only carried for enumerated schemas.
/// Records without a key are `None`.
#[must_use]
pub fn restructure_listing_fields(hosted: &[Value]) -> Vec<Option<RawRecord>> {
    hosted
        .iter()
        .map(|record| {
            let restructured = record.as_object().and_then(restructure_listing_field);
            if restructured.is_none() {
                debug!(record = %record, "Hosted listing field lacks a key; skipped");
            }
            restructured
        })
        .collect()
}

fn restructure_listing_field(record: &RawRecord) -> Option<RawRecord> {
    let key = record.get("key")?.as_str().filter(|key| !key.is_empty())?;
    let default_label = non_empty_str(record.get("label")).unwrap_or(key);

    let mut field = RawRecord::new();
    field.insert("key".to_owned(), Value::from(key));
    for name in ["scope", "schemaType"] {
        if let Some(value) = record.get(name) {
            field.insert(name.to_owned(), value.clone());
        }
    }
    let is_enum = record
        .get("schemaType")
        .and_then(Value::as_str)
        .and_then(SchemaType::from_wire)
        .is_some_and(SchemaType::is_enum);
    if let Some(options) = record.get("enumOptions").filter(|_| is_enum) {
        field.insert("enumOptions".to_owned(), options.clone());
    }
    for name in ["filterConfig", "showConfig"] {
        field.insert(
            name.to_owned(),
            with_default_label(record.get(name), default_label),
        );
    }
    let mut save_config = with_default_label(record.get("saveConfig"), default_label);
    if let Some(block) = save_config.as_object_mut()
        && let Some(required) = block.remove("required")
    {
        block.insert("isRequired".to_owned(), required);
    }
    field.insert("saveConfig".to_owned(), save_config);
    field.extend(rest_of(record, LISTING_FIELD_KEYS));
    Some(field)
}

/// Fill a block's label from `default_label` unless it already has one.
/// Non-object blocks are returned unchanged so validation can reject them.
fn with_default_label(source: Option<&Value>, default_label: &str) -> Value {
    let mut block = match present(source) {
        None => Value::Object(RawRecord::new()),
        Some(value) => value.clone(),
    };
    if let Value::Object(map) = &mut block {
        let label = non_empty_str(map.get("label")).unwrap_or(default_label).to_owned();
        map.insert("label".to_owned(), Value::String(label));
    }
    block
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|text| !text.is_empty())
}

fn rest_of(record: &RawRecord, consumed: &[&str]) -> RawRecord {
    record
        .iter()
        .filter(|(name, _)| !consumed.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}
