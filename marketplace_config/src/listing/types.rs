//! Canonical listing configuration records.

use serde::{Deserialize, Serialize};

use crate::RawRecord;
use crate::validate::closed_set;

closed_set! {
    /// Visibility of a listing extended data field.
    pub enum Scope {
        /// Stored in the listing's public data.
        Public => "public",
        /// Stored in the listing's private data.
        Private => "private",
    }
}

closed_set! {
    /// Data shape of a listing extended data field.
    pub enum SchemaType {
        /// One option out of `enumOptions`.
        Enum => "enum",
        /// Any number of options out of `enumOptions`.
        MultiEnum => "multi-enum",
        /// Free text.
        Text => "text",
        /// Integer.
        Long => "long",
        /// Yes or no.
        Boolean => "boolean",
    }
}

impl SchemaType {
    /// Whether the schema draws its values from `enumOptions`.
    #[must_use]
    pub const fn is_enum(self) -> bool {
        matches!(self, Self::Enum | Self::MultiEnum)
    }
}

closed_set! {
    /// Filter component used for enumerated fields on the search page.
    pub enum FilterType {
        /// Pick exactly one option.
        SelectSingleFilter => "SelectSingleFilter",
        /// Pick any number of options.
        SelectMultipleFilter => "SelectMultipleFilter",
    }
}

closed_set! {
    /// Matching mode for multi-enum search filters.
    pub enum SearchMode {
        /// Listings must have every selected option.
        HasAll => "has_all",
        /// Listings must have at least one selected option.
        HasAny => "has_any",
    }
}

closed_set! {
    /// Where a filter is rendered on the search page.
    pub enum FilterGroup {
        /// Always visible.
        Primary => "primary",
        /// Behind the "more filters" toggle.
        Secondary => "secondary",
    }
}

closed_set! {
    /// Stock management mode of a listing type.
    pub enum StockType {
        /// The listing is unique (stock is always one).
        OneItem => "oneItem",
        /// Stock is managed by the provider.
        MultipleItems => "multipleItems",
    }
}

/// One option of an enumerated field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumOption {
    /// Value stored in extended data.
    pub option: String,
    /// Human-readable label.
    pub label: String,
    /// Parent option, for nested categories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

/// Search filter configuration of a listing field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterConfig {
    /// Whether the field has a search index and can filter listing queries.
    pub index_for_search: bool,
    /// Filter label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Filter component; only set for enumerated schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_type: Option<FilterType>,
    /// Matching mode; only set for multi-enum schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_mode: Option<SearchMode>,
    /// Filter group on the search page.
    pub group: FilterGroup,
}

/// How a listing field is shown on the listing page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowConfig {
    /// Label shown next to the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Whether the value is listed in the details section.
    pub is_detail: bool,
}

/// How a listing field is edited in the listing wizard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveConfig {
    /// Input label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Placeholder shown in the empty input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder_message: Option<String>,
    /// Whether providers must fill the field.
    pub is_required: bool,
    /// Message shown when a required field is left empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_message: Option<String>,
}

/// A validated listing extended data field.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingField {
    /// Unique extended data key.
    pub key: String,
    /// Public or private data.
    pub scope: Scope,
    /// Data shape.
    pub schema_type: SchemaType,
    /// Options for enumerated schemas.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enum_options: Option<Vec<EnumOption>>,
    /// Listing types the field applies to; never empty.
    pub include_for_listing_types: Vec<String>,
    /// Search filter settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_config: Option<FilterConfig>,
    /// Listing page settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_config: Option<ShowConfig>,
    /// Listing wizard settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_config: Option<SaveConfig>,
    /// Unrecognized properties, carried unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
}

/// Transaction settings bound to a listing type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionType {
    /// Transaction process name.
    pub process: String,
    /// Process alias transactions are initiated with.
    pub alias: String,
    /// Pricing unit.
    pub unit_type: String,
    /// Any further settings, carried unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
}

/// A listing type preset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingType {
    /// Unique listing type id.
    pub listing_type: String,
    /// Label used when providers pick a listing type.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Transaction process binding.
    pub transaction_type: TransactionType,
    /// Stock management mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stock_type: Option<StockType>,
    /// Any further settings, carried unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
}
