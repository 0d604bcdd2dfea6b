//! Validators for the nested configuration blocks of a listing field.

use serde_json::Value;

use super::{
    Rejection, RejectionReason, Validated, present, valid_boolean, valid_enum, valid_label,
    valid_optional_string,
};
use crate::listing::{
    EnumOption, FilterConfig, FilterGroup, FilterType, SaveConfig, SchemaType, SearchMode,
    ShowConfig,
};
use crate::RawRecord;

/// Borrow `config` as an object, treating `null` as absent.
fn as_block<'a>(name: &str, config: Option<&'a Value>) -> Validated<Option<&'a RawRecord>> {
    match present(config) {
        None => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(_) => Err(Rejection::new(name, config, RejectionReason::NotObject)),
    }
}

/// Validate the filter component of a field.
///
/// Only enumerated schemas carry a filter type; an unset value defaults to
/// [`FilterType::SelectMultipleFilter`]. For other schemas the value is
/// ignored.
///
/// # Errors
///
/// Returns a [`Rejection`] when an enumerated schema names an unknown filter
/// type.
pub fn valid_filter_type(
    filter_type: Option<&Value>,
    schema_type: Option<SchemaType>,
) -> Validated<Option<FilterType>> {
    if !schema_type.is_some_and(SchemaType::is_enum) {
        return Ok(None);
    }
    valid_enum("filterType", filter_type, Some(FilterType::SelectMultipleFilter)).map(Some)
}

/// Validate the search mode of a field.
///
/// Only multi-enum schemas carry a search mode; an unset value defaults to
/// [`SearchMode::HasAll`]. For other schemas the value is ignored.
///
/// # Errors
///
/// Returns a [`Rejection`] when a multi-enum schema names an unknown mode.
pub fn valid_search_mode(
    search_mode: Option<&Value>,
    schema_type: Option<SchemaType>,
) -> Validated<Option<SearchMode>> {
    if schema_type != Some(SchemaType::MultiEnum) {
        return Ok(None);
    }
    valid_enum("searchMode", search_mode, Some(SearchMode::HasAll)).map(Some)
}

/// Validate a `filterConfig` block against the field's schema type.
///
/// An absent block is valid and yields `None`. Every sub-check must pass for
/// the block to be accepted.
///
/// # Errors
///
/// Returns the first [`Rejection`], with its path prefixed by `filterConfig`.
///
/// # Examples
///
/// ```
/// use marketplace_config::listing::{FilterType, SchemaType};
/// use marketplace_config::validate::valid_filter_config;
/// use serde_json::json;
///
/// let config = json!({"indexForSearch": true, "label": "Category"});
/// let filter = valid_filter_config(Some(&config), Some(SchemaType::Enum))?
///     .expect("block is present");
/// assert_eq!(filter.filter_type, Some(FilterType::SelectMultipleFilter));
///
/// let bad = json!({"filterType": "BadType"});
/// let rejection = valid_filter_config(Some(&bad), Some(SchemaType::Enum)).unwrap_err();
/// assert_eq!(rejection.property, "filterConfig.filterType");
/// # Ok::<_, marketplace_config::Rejection>(())
/// ```
pub fn valid_filter_config(
    config: Option<&Value>,
    schema_type: Option<SchemaType>,
) -> Validated<Option<FilterConfig>> {
    const NAME: &str = "filterConfig";
    let Some(block) = as_block(NAME, config)? else {
        return Ok(None);
    };
    let checked = || -> Validated<FilterConfig> {
        Ok(FilterConfig {
            index_for_search: valid_boolean(
                "indexForSearch",
                block.get("indexForSearch"),
                Some(false),
            )?,
            label: valid_label(block.get("label"))?,
            filter_type: valid_filter_type(block.get("filterType"), schema_type)?,
            search_mode: valid_search_mode(block.get("searchMode"), schema_type)?,
            group: valid_enum("group", block.get("group"), Some(FilterGroup::Primary))?,
        })
    };
    checked().map(Some).map_err(|rejection| rejection.within(NAME))
}

/// Validate a `showConfig` block.
///
/// # Errors
///
/// Returns the first [`Rejection`], with its path prefixed by `showConfig`.
pub fn valid_show_config(config: Option<&Value>) -> Validated<Option<ShowConfig>> {
    const NAME: &str = "showConfig";
    let Some(block) = as_block(NAME, config)? else {
        return Ok(None);
    };
    let checked = || -> Validated<ShowConfig> {
        Ok(ShowConfig {
            label: valid_label(block.get("label"))?,
            is_detail: valid_boolean("isDetail", block.get("isDetail"), Some(true))?,
        })
    };
    checked().map(Some).map_err(|rejection| rejection.within(NAME))
}

/// Validate a `saveConfig` block.
///
/// # Errors
///
/// Returns the first [`Rejection`], with its path prefixed by `saveConfig`.
pub fn valid_save_config(config: Option<&Value>) -> Validated<Option<SaveConfig>> {
    const NAME: &str = "saveConfig";
    let Some(block) = as_block(NAME, config)? else {
        return Ok(None);
    };
    let checked = || -> Validated<SaveConfig> {
        Ok(SaveConfig {
            label: valid_label(block.get("label"))?,
            placeholder_message: valid_optional_string(
                "placeholderMessage",
                block.get("placeholderMessage"),
            )?,
            is_required: valid_boolean("isRequired", block.get("isRequired"), Some(false))?,
            required_message: valid_optional_string(
                "requiredMessage",
                block.get("requiredMessage"),
            )?,
        })
    };
    checked().map(Some).map_err(|rejection| rejection.within(NAME))
}

/// Validate the `enumOptions` list of a field.
///
/// Unset options are valid. A list is valid when every entry has a string
/// `option` and a string `label` (and, if given, a string `parent`). Options
/// are only kept for enumerated schemas.
///
/// # Errors
///
/// Returns a [`Rejection`] for `enumOptions` when the value is not a list or
/// contains a malformed entry.
pub fn valid_schema_options(
    enum_options: Option<&Value>,
    schema_type: Option<SchemaType>,
) -> Validated<Option<Vec<EnumOption>>> {
    const NAME: &str = "enumOptions";
    let entries = match present(enum_options) {
        None => return Ok(None),
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(Rejection::new(NAME, enum_options, RejectionReason::NotList)),
    };
    let options = entries
        .iter()
        .map(|entry| serde_json::from_value::<EnumOption>(entry.clone()))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| Rejection::new(NAME, enum_options, RejectionReason::MalformedOption))?;
    Ok(schema_type.is_some_and(SchemaType::is_enum).then_some(options))
}

/// Validate the listing types a field is included for.
///
/// Unset resolves to every listing type in use. A list is narrowed to the ids
/// present in `listing_types_in_use`.
///
/// # Errors
///
/// Returns a [`Rejection`] when the value is not a list, or when none of its
/// ids are in use.
///
/// # Examples
///
/// ```
/// use marketplace_config::validate::valid_listing_types_for_listing_config;
/// use serde_json::json;
///
/// let in_use = vec!["rent".to_owned(), "sell".to_owned()];
/// let include = json!(["sell", "gift"]);
/// assert_eq!(
///     valid_listing_types_for_listing_config(Some(&include), &in_use),
///     Ok(vec!["sell".to_owned()])
/// );
/// assert_eq!(valid_listing_types_for_listing_config(None, &in_use), Ok(in_use.clone()));
/// assert!(valid_listing_types_for_listing_config(Some(&json!(["gift"])), &in_use).is_err());
/// ```
pub fn valid_listing_types_for_listing_config(
    include_for_listing_types: Option<&Value>,
    listing_types_in_use: &[String],
) -> Validated<Vec<String>> {
    const NAME: &str = "includeForListingTypes";
    let requested = match present(include_for_listing_types) {
        None => return Ok(listing_types_in_use.to_vec()),
        Some(Value::Array(requested)) => requested,
        Some(_) => {
            return Err(Rejection::new(
                NAME,
                include_for_listing_types,
                RejectionReason::NotList,
            ));
        }
    };
    let validated: Vec<String> = requested
        .iter()
        .filter_map(Value::as_str)
        .filter(|id| listing_types_in_use.iter().any(|in_use| in_use == id))
        .map(str::to_owned)
        .collect();
    if validated.is_empty() {
        return Err(Rejection::new(
            NAME,
            include_for_listing_types,
            RejectionReason::NoListingTypesInUse,
        ));
    }
    Ok(validated)
}
