//! Search result sorting.

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::RawRecord;

/// One sort option offered on the search page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SortOption {
    /// Sort parameter value, e.g. `-price`.
    pub key: String,
    /// Option label.
    pub label: String,
    /// Further option settings such as `longLabel`, carried unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
}

/// Validated sort configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    /// Whether sorting is offered.
    pub active: bool,
    /// Query parameter carrying the sort key.
    pub query_param_name: String,
    /// Sort key meaning "by relevance".
    pub relevance_key: String,
    /// Filter whose presence enables relevance sorting.
    pub relevance_filter: String,
    /// Filters that disable sorting while active.
    pub conflicting_filters: Vec<String>,
    /// Sort options in display order.
    pub options: Vec<SortOption>,
}

fn non_empty<'a>(config: &'a RawRecord, name: &str) -> Option<&'a str> {
    config
        .get(name)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

fn sort_option(entry: &Value) -> Option<SortOption> {
    let record = entry.as_object()?;
    Some(SortOption {
        key: non_empty(record, "key")?.to_owned(),
        label: non_empty(record, "label")?.to_owned(),
        extra: record
            .iter()
            .filter(|(name, _)| !matches!(name.as_str(), "key" | "label"))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect(),
    })
}

/// Normalize a sort configuration.
///
/// Sorting is not operator-editable, so this never rejects the block: every
/// unusable property takes its default and options without a key or label
/// are dropped.
///
/// # Examples
///
/// ```
/// use marketplace_config::search::valid_sort_config;
/// use serde_json::json;
///
/// let config = json!({"options": [{"key": "createdAt", "label": "Newest"}, {"key": "price"}]});
/// let sort = valid_sort_config(Some(&config));
/// assert!(sort.active);
/// assert_eq!(sort.query_param_name, "sort");
/// assert_eq!(sort.options.len(), 1);
/// ```
#[must_use]
pub fn valid_sort_config(config: Option<&Value>) -> SortConfig {
    let empty = RawRecord::new();
    let record = config.and_then(Value::as_object).unwrap_or(&empty);
    let text_or = |name: &str, default: &str| non_empty(record, name).unwrap_or(default).to_owned();

    let options = record
        .get("options")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| {
                    let option = sort_option(entry);
                    if option.is_none() {
                        warn!(value = %entry, "Sort option without key or label dropped");
                    }
                    option
                })
                .collect()
        })
        .unwrap_or_default();

    SortConfig {
        active: record.get("active").and_then(Value::as_bool).unwrap_or(true),
        query_param_name: text_or("queryParamName", "sort"),
        relevance_key: text_or("relevanceKey", "relevance"),
        relevance_filter: text_or("relevanceFilter", "keywords"),
        conflicting_filters: record
            .get("conflictingFilters")
            .and_then(Value::as_array)
            .map(|names| {
                names
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_owned)
                    .collect()
            })
            .unwrap_or_default(),
        options,
    }
}
