//! Validation of listing extended data fields.
//!
//! A field record is validated property by property. Each known property name
//! maps to a typed validator through [`FieldProperty::validator`]; unknown
//! names pass through unchanged. A field is kept only when every property
//! validates.

use serde_json::Value;
use tracing::warn;

use super::{
    ClosedSet, Rejection, RejectionReason, Validated, closed_set, present, valid_enum,
    valid_filter_config, valid_listing_types_for_listing_config, valid_save_config,
    valid_schema_options, valid_show_config,
};
use crate::RawRecord;
use crate::listing::{
    EnumOption, FilterConfig, ListingField, SaveConfig, SchemaType, Scope, ShowConfig,
};

closed_set! {
    /// Listing field properties that have a dedicated validator.
    pub enum FieldProperty {
        /// Unique extended data key.
        Key => "key",
        /// Public or private data.
        Scope => "scope",
        /// Listing types the field applies to.
        IncludeForListingTypes => "includeForListingTypes",
        /// Data shape.
        SchemaType => "schemaType",
        /// Options of enumerated schemas.
        EnumOptions => "enumOptions",
        /// Search filter block.
        FilterConfig => "filterConfig",
        /// Listing page block.
        ShowConfig => "showConfig",
        /// Listing wizard block.
        SaveConfig => "saveConfig",
    }
}

/// Validator signature shared by every property.
pub type PropertyValidator = fn(&str, &Value, &FieldContext<'_>) -> Validated<FieldFragment>;

impl FieldProperty {
    /// The validator responsible for this property.
    #[must_use]
    pub const fn validator(self) -> PropertyValidator {
        match self {
            Self::Key => validate_key,
            Self::Scope => validate_scope,
            Self::IncludeForListingTypes => validate_include_for_listing_types,
            Self::SchemaType => validate_schema_type,
            Self::EnumOptions => validate_enum_options,
            Self::FilterConfig => validate_filter_config,
            Self::ShowConfig => validate_show_config,
            Self::SaveConfig => validate_save_config,
        }
    }

    /// The validator for a property name, falling back to a pass-through for
    /// names without a dedicated validator.
    #[must_use]
    pub fn validator_for(name: &str) -> PropertyValidator {
        Self::from_wire(name).map_or(pass_through as PropertyValidator, Self::validator)
    }
}

/// Data shared by every property validator of one field.
#[derive(Clone, Copy, Debug)]
pub struct FieldContext<'a> {
    /// The field's declared schema type, if recognised.
    pub schema_type: Option<SchemaType>,
    /// Keys of every candidate field, used for the uniqueness check.
    pub all_keys: &'a [Option<&'a str>],
    /// Ids of every listing type in use.
    pub listing_types_in_use: &'a [String],
}

/// A normalized piece of a listing field produced by one property validator.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum FieldFragment {
    /// Validated key.
    Key(String),
    /// Validated scope.
    Scope(Scope),
    /// Listing types the field is included for.
    IncludeForListingTypes(Vec<String>),
    /// Validated schema type.
    SchemaType(SchemaType),
    /// Enum options, if meaningful for the schema.
    EnumOptions(Option<Vec<EnumOption>>),
    /// Search filter block.
    FilterConfig(Option<FilterConfig>),
    /// Listing page block.
    ShowConfig(Option<ShowConfig>),
    /// Listing wizard block.
    SaveConfig(Option<SaveConfig>),
    /// Unrecognized property, carried unchanged.
    Extra(String, Value),
}

fn validate_key(name: &str, value: &Value, ctx: &FieldContext<'_>) -> Validated<FieldFragment> {
    let Some(key) = value.as_str() else {
        return Err(Rejection::new(name, Some(value), RejectionReason::NotString));
    };
    let occurrences = ctx.all_keys.iter().filter(|k| **k == Some(key)).count();
    if occurrences > 1 {
        return Err(Rejection::new(name, Some(value), RejectionReason::DuplicateKey));
    }
    Ok(FieldFragment::Key(key.to_owned()))
}

fn validate_scope(name: &str, value: &Value, _: &FieldContext<'_>) -> Validated<FieldFragment> {
    valid_enum(name, Some(value), Some(Scope::Public)).map(FieldFragment::Scope)
}

fn validate_include_for_listing_types(
    _: &str,
    value: &Value,
    ctx: &FieldContext<'_>,
) -> Validated<FieldFragment> {
    valid_listing_types_for_listing_config(Some(value), ctx.listing_types_in_use)
        .map(FieldFragment::IncludeForListingTypes)
}

fn validate_schema_type(
    name: &str,
    value: &Value,
    _: &FieldContext<'_>,
) -> Validated<FieldFragment> {
    valid_enum(name, Some(value), None).map(FieldFragment::SchemaType)
}

fn validate_enum_options(
    _: &str,
    value: &Value,
    ctx: &FieldContext<'_>,
) -> Validated<FieldFragment> {
    valid_schema_options(Some(value), ctx.schema_type).map(FieldFragment::EnumOptions)
}

fn validate_filter_config(
    _: &str,
    value: &Value,
    ctx: &FieldContext<'_>,
) -> Validated<FieldFragment> {
    valid_filter_config(Some(value), ctx.schema_type).map(FieldFragment::FilterConfig)
}

fn validate_show_config(
    _: &str,
    value: &Value,
    _: &FieldContext<'_>,
) -> Validated<FieldFragment> {
    valid_show_config(Some(value)).map(FieldFragment::ShowConfig)
}

fn validate_save_config(
    _: &str,
    value: &Value,
    _: &FieldContext<'_>,
) -> Validated<FieldFragment> {
    valid_save_config(Some(value)).map(FieldFragment::SaveConfig)
}

fn pass_through(name: &str, value: &Value, _: &FieldContext<'_>) -> Validated<FieldFragment> {
    Ok(FieldFragment::Extra(name.to_owned(), value.clone()))
}

/// Accumulates fragments until every property of a record has been seen.
#[derive(Default)]
struct FieldAssembly {
    key: Option<String>,
    scope: Option<Scope>,
    schema_type: Option<SchemaType>,
    enum_options: Option<Vec<EnumOption>>,
    include_for_listing_types: Option<Vec<String>>,
    filter_config: Option<FilterConfig>,
    show_config: Option<ShowConfig>,
    save_config: Option<SaveConfig>,
    extra: RawRecord,
}

impl FieldAssembly {
    fn apply(&mut self, fragment: FieldFragment) {
        match fragment {
            FieldFragment::Key(key) => self.key = Some(key),
            FieldFragment::Scope(scope) => self.scope = Some(scope),
            FieldFragment::IncludeForListingTypes(ids) => {
                self.include_for_listing_types = Some(ids);
            }
            FieldFragment::SchemaType(schema) => self.schema_type = Some(schema),
            FieldFragment::EnumOptions(options) => self.enum_options = options,
            FieldFragment::FilterConfig(config) => self.filter_config = config,
            FieldFragment::ShowConfig(config) => self.show_config = config,
            FieldFragment::SaveConfig(config) => self.save_config = config,
            FieldFragment::Extra(name, value) => {
                self.extra.insert(name, value);
            }
        }
    }

    fn finish(self, listing_types_in_use: &[String]) -> Validated<ListingField> {
        let key = self
            .key
            .ok_or_else(|| Rejection::new("key", None, RejectionReason::Missing))?;
        let schema_type = self
            .schema_type
            .ok_or_else(|| Rejection::new("schemaType", None, RejectionReason::Missing))?;
        Ok(ListingField {
            key,
            scope: self.scope.unwrap_or(Scope::Public),
            schema_type,
            enum_options: self.enum_options,
            include_for_listing_types: self
                .include_for_listing_types
                .unwrap_or_else(|| listing_types_in_use.to_vec()),
            filter_config: self.filter_config,
            show_config: self.show_config,
            save_config: self.save_config,
            extra: self.extra,
        })
    }
}

/// Validate a single field record.
///
/// Every property is checked, so all problems of a record are reported at
/// once.
///
/// # Errors
///
/// Returns every [`Rejection`] found in the record.
pub fn valid_listing_field(
    record: &RawRecord,
    ctx: &FieldContext<'_>,
) -> Result<ListingField, Vec<Rejection>> {
    let mut assembly = FieldAssembly::default();
    let mut rejections = Vec::new();
    for (name, value) in record {
        let outcome = if present(Some(value)).is_none() && FieldProperty::from_wire(name).is_some() {
            skip_null(name, value, ctx)
        } else {
            FieldProperty::validator_for(name)(name, value, ctx)
        };
        match outcome {
            Ok(fragment) => assembly.apply(fragment),
            Err(rejection) => rejections.push(rejection),
        }
    }
    if !rejections.is_empty() {
        return Err(rejections);
    }
    assembly
        .finish(ctx.listing_types_in_use)
        .map_err(|rejection| vec![rejection])
}

/// `null` on a known property means "unset": fields with defaults take them,
/// required ones are rejected.
fn skip_null(name: &str, value: &Value, ctx: &FieldContext<'_>) -> Validated<FieldFragment> {
    match FieldProperty::from_wire(name) {
        Some(FieldProperty::Scope) => Ok(FieldFragment::Scope(Scope::Public)),
        Some(FieldProperty::IncludeForListingTypes) => Ok(FieldFragment::IncludeForListingTypes(
            ctx.listing_types_in_use.to_vec(),
        )),
        Some(FieldProperty::EnumOptions) => Ok(FieldFragment::EnumOptions(None)),
        Some(FieldProperty::FilterConfig) => Ok(FieldFragment::FilterConfig(None)),
        Some(FieldProperty::ShowConfig) => Ok(FieldFragment::ShowConfig(None)),
        Some(FieldProperty::SaveConfig) => Ok(FieldFragment::SaveConfig(None)),
        Some(FieldProperty::Key | FieldProperty::SchemaType) | None => Err(Rejection::new(
            name,
            Some(value),
            RejectionReason::Missing,
        )),
    }
}

/// Validate every candidate field, dropping the invalid ones.
///
/// Key uniqueness is checked across all candidates: when two records share a
/// key, both are dropped. Each rejection is logged with the field key and the
/// offending property.
#[must_use]
pub fn valid_listing_fields(records: &[RawRecord], listing_types_in_use: &[String]) -> Vec<ListingField> {
    let all_keys: Vec<Option<&str>> = records
        .iter()
        .map(|record| record.get("key").and_then(Value::as_str))
        .collect();

    records
        .iter()
        .zip(&all_keys)
        .filter_map(|(record, key)| {
            let ctx = FieldContext {
                schema_type: record
                    .get("schemaType")
                    .and_then(Value::as_str)
                    .and_then(SchemaType::from_wire),
                all_keys: &all_keys,
                listing_types_in_use,
            };
            match valid_listing_field(record, &ctx) {
                Ok(field) => Some(field),
                Err(rejections) => {
                    for rejection in rejections {
                        warn!(
                            field = key.unwrap_or_default(),
                            property = %rejection.property,
                            value = %rejection.value,
                            reason = %rejection.reason,
                            "Unsupported listing extended data configuration detected; field dropped"
                        );
                    }
                    None
                }
            }
        })
        .collect()
}
