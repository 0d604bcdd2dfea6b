//! Search page configuration: main search type, default filters and sorting.
//!
//! The hosted `search` asset replaces the default search configuration as a
//! whole once it declares a `mainSearch`. Sorting is not part of the hosted
//! asset and keeps coming from the defaults unless the hosted object carries
//! its own.

mod filters;
mod sort;

pub use filters::{
    Availability, DateRangeMode, DatesFilter, DefaultFilter, PriceFilter, valid_dates_filter,
    valid_default_filters, valid_price_filter,
};
pub use sort::{SortConfig, SortOption, valid_sort_config};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::RawRecord;
use crate::hosted::HostedConfig;
use crate::validate::{closed_set, present, valid_enum};

closed_set! {
    /// What the top bar search looks for.
    pub enum SearchType {
        /// Search by place.
        Location => "location",
        /// Free-text search.
        Keywords => "keywords",
    }
}

/// The top bar search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainSearch {
    /// Search type.
    pub search_type: SearchType,
}

/// Merged search configuration.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchConfig {
    /// Top bar search.
    pub main_search: MainSearch,
    /// Date, price and keyword filters, in that order.
    pub default_filters: Vec<DefaultFilter>,
    /// Sorting.
    pub sort_config: SortConfig,
    /// Unrecognized search properties, carried unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
}

const MERGED_KEYS: &[&str] = &[
    "mainSearch",
    "dateRangeFilter",
    "priceFilter",
    "keywordsFilter",
    "sortConfig",
];

/// Merge the hosted `search` asset with the default search configuration.
///
/// When the hosted object is used, a date or price filter it omits is taken
/// from the defaults. The keyword filter is only present when the chosen
/// object declares one.
///
/// # Examples
///
/// ```
/// use marketplace_config::HostedConfig;
/// use marketplace_config::search::{SearchType, merge_search_config};
/// use serde_json::json;
///
/// let defaults = json!({"mainSearch": {"searchType": "location"}});
/// let asset = json!({"mainSearch": {"searchType": "everything"}});
/// let search = merge_search_config(
///     HostedConfig::new(&asset),
///     defaults.as_object().expect("object"),
/// );
/// assert_eq!(search.main_search.search_type, SearchType::Keywords);
/// assert_eq!(search.sort_config.query_param_name, "sort");
/// ```
#[must_use]
pub fn merge_search_config(hosted: HostedConfig<'_>, defaults: &RawRecord) -> SearchConfig {
    let source = hosted
        .record()
        .filter(|record| present(record.get("mainSearch")).is_some())
        .unwrap_or(defaults);
    let slot = |name: &str| present(source.get(name)).or_else(|| present(defaults.get(name)));

    let requested = source.get("mainSearch").and_then(|main| main.get("searchType"));
    let search_type = valid_enum("searchType", requested, Some(SearchType::Keywords))
        .unwrap_or_else(|rejection| {
            warn!(
                property = "mainSearch.searchType",
                value = %rejection.value,
                reason = %rejection.reason,
                "Unsupported search type detected; using keywords"
            );
            SearchType::Keywords
        });

    let filters: Vec<&Value> = [slot("dateRangeFilter"), slot("priceFilter")]
        .into_iter()
        .chain([present(source.get("keywordsFilter"))])
        .flatten()
        .collect();

    SearchConfig {
        main_search: MainSearch { search_type },
        default_filters: valid_default_filters(&filters),
        sort_config: valid_sort_config(slot("sortConfig")),
        extra: source
            .iter()
            .filter(|(name, _)| !MERGED_KEYS.contains(&name.as_str()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    }
}
