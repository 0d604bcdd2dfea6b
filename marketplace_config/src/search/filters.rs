//! Default search filters: the date range filter, the price filter and any
//! custom filter carried verbatim.

use serde::Serialize;
use serde_json::{Number, Value};
use tracing::{error, warn};

use crate::RawRecord;
use crate::validate::{
    Rejection, RejectionReason, Validated, closed_set, present, valid_boolean, valid_enum,
    valid_optional_string,
};

closed_set! {
    /// How a date range is counted.
    pub enum DateRangeMode {
        /// Whole days; the end date is included.
        Day => "day",
        /// Nights; the end date is the check-out day.
        Night => "night",
    }
}

closed_set! {
    /// Which listings match a date range.
    pub enum Availability {
        /// Listings available for the whole range.
        TimeFull => "time-full",
        /// Listings available for part of the range.
        TimePartial => "time-partial",
    }
}

/// Validated date range filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatesFilter {
    /// Always `dates`.
    pub key: String,
    /// Filter label.
    pub label: String,
    /// Counting mode.
    pub date_range_mode: DateRangeMode,
    /// Matching mode.
    pub availability: Availability,
}

/// Validated price filter.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PriceFilter {
    /// Always `price`.
    pub key: String,
    /// Filter label.
    pub label: String,
    /// Lower bound of the slider.
    pub min: Number,
    /// Upper bound of the slider; greater than `min`.
    pub max: Number,
    /// Slider step.
    pub step: Number,
}

/// One entry of the search page's default filter list.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "schemaType", rename_all = "lowercase")]
pub enum DefaultFilter {
    /// Date range filter.
    Dates(DatesFilter),
    /// Price range filter.
    Price(PriceFilter),
    /// Any other filter, e.g. keywords, carried unchanged.
    #[serde(untagged)]
    Custom(RawRecord),
}

fn valid_number(key: &str, value: Option<&Value>, default: u64) -> Validated<Number> {
    match present(value) {
        None => Ok(Number::from(default)),
        Some(Value::Number(number)) => Ok(number.clone()),
        Some(_) => Err(Rejection::new(key, value, RejectionReason::NotNumber)),
    }
}

/// Validate a date range filter. A disabled filter yields `None`.
///
/// # Errors
///
/// Returns a [`Rejection`] when a property has the wrong type or an
/// unsupported value.
pub fn valid_dates_filter(config: &RawRecord) -> Validated<Option<DatesFilter>> {
    if !valid_boolean("enabled", config.get("enabled"), Some(true))? {
        return Ok(None);
    }
    Ok(Some(DatesFilter {
        key: "dates".to_owned(),
        label: valid_optional_string("label", config.get("label"))?
            .unwrap_or_else(|| "Dates".to_owned()),
        date_range_mode: valid_enum(
            "dateRangeMode",
            config.get("dateRangeMode"),
            Some(DateRangeMode::Day),
        )?,
        availability: valid_enum(
            "availability",
            config.get("availability"),
            Some(Availability::TimeFull),
        )?,
    }))
}

/// Validate a price filter. A disabled filter yields `None`.
///
/// # Errors
///
/// Returns a [`Rejection`] when a property has the wrong type, or
/// [`RejectionReason::InvalidRange`] when `max` does not exceed `min`.
///
/// # Examples
///
/// ```
/// use marketplace_config::RejectionReason;
/// use marketplace_config::search::valid_price_filter;
/// use serde_json::json;
///
/// let ok = json!({"min": 0, "max": 1000, "step": 5});
/// let price = valid_price_filter(ok.as_object().expect("object"))?.expect("enabled");
/// assert_eq!(price.max.as_u64(), Some(1000));
///
/// let inverted = json!({"min": 10, "max": 5});
/// let rejection = valid_price_filter(inverted.as_object().expect("object")).unwrap_err();
/// assert!(matches!(rejection.reason, RejectionReason::InvalidRange { .. }));
/// # Ok::<_, marketplace_config::Rejection>(())
/// ```
pub fn valid_price_filter(config: &RawRecord) -> Validated<Option<PriceFilter>> {
    if !valid_boolean("enabled", config.get("enabled"), Some(true))? {
        return Ok(None);
    }
    let label = valid_optional_string("label", config.get("label"))?
        .unwrap_or_else(|| "Price".to_owned());
    let min = valid_number("min", config.get("min"), 0)?;
    let max = valid_number("max", config.get("max"), 1000)?;
    let step = valid_number("step", config.get("step"), 5)?;
    let ordered = matches!((min.as_f64(), max.as_f64()), (Some(lo), Some(hi)) if hi > lo);
    if !ordered {
        return Err(Rejection::new(
            "max",
            config.get("max"),
            RejectionReason::InvalidRange {
                min: min.to_string(),
                max: max.to_string(),
            },
        ));
    }
    Ok(Some(PriceFilter {
        key: "price".to_owned(),
        label,
        min,
        max,
        step,
    }))
}

/// Validate the default filters in order, dropping disabled and invalid ones.
///
/// Filters whose `schemaType` is `dates` or `price` are validated; any other
/// object is carried unchanged.
#[must_use]
pub fn valid_default_filters(filters: &[&Value]) -> Vec<DefaultFilter> {
    filters
        .iter()
        .filter_map(|filter| {
            let Some(record) = filter.as_object() else {
                warn!(value = %filter, "Unsupported default filter detected; filter dropped");
                return None;
            };
            let schema_type = record.get("schemaType").and_then(Value::as_str);
            let outcome = match schema_type {
                Some("dates") => valid_dates_filter(record).map(|f| f.map(DefaultFilter::Dates)),
                Some("price") => valid_price_filter(record).map(|f| f.map(DefaultFilter::Price)),
                _ => Ok(Some(DefaultFilter::Custom(record.clone()))),
            };
            outcome.unwrap_or_else(|rejection| {
                log_rejection(schema_type.unwrap_or_default(), &rejection);
                None
            })
        })
        .collect()
}

fn log_rejection(filter: &str, rejection: &Rejection) {
    if matches!(rejection.reason, RejectionReason::InvalidRange { .. }) {
        error!(
            filter,
            property = %rejection.property,
            reason = %rejection.reason,
            "Invalid default filter range; filter dropped"
        );
    } else {
        warn!(
            filter,
            property = %rejection.property,
            value = %rejection.value,
            reason = %rejection.reason,
            "Unsupported default filter configuration detected; filter dropped"
        );
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;
    use test_helpers::logs;
    use tracing::Level;

    use super::*;

    fn record(value: Value) -> RawRecord {
        value.as_object().cloned().expect("test input is an object")
    }

    #[rstest]
    fn date_filter_defaults_fill_omitted_properties() {
        let filter = valid_dates_filter(&RawRecord::new())
            .expect("valid")
            .expect("enabled by default");
        assert_eq!(filter.label, "Dates");
        assert_eq!(filter.date_range_mode, DateRangeMode::Day);
        assert_eq!(filter.availability, Availability::TimeFull);
    }

    #[rstest]
    #[case(json!({"dateRangeMode": "week"}), "dateRangeMode")]
    #[case(json!({"availability": "sometimes"}), "availability")]
    #[case(json!({"label": 12}), "label")]
    #[case(json!({"enabled": "yes"}), "enabled")]
    fn date_filter_rejects_bad_properties(#[case] config: Value, #[case] property: &str) {
        let rejection = valid_dates_filter(&record(config)).expect_err("invalid config");
        assert_eq!(rejection.property, property);
    }

    #[rstest]
    fn price_range_is_kept_unchanged() {
        let filter = valid_price_filter(&record(json!({"min": 0, "max": 1000, "step": 5})))
            .expect("valid")
            .expect("enabled");
        assert_eq!(
            serde_json::to_value(DefaultFilter::Price(filter)).expect("serialises"),
            json!({"schemaType": "price", "key": "price", "label": "Price", "min": 0, "max": 1000, "step": 5})
        );
    }

    #[rstest]
    #[case(json!({"min": 10, "max": 5}))]
    #[case(json!({"min": 5, "max": 5}))]
    #[case(json!({"min": 2000}))]
    fn price_range_must_be_increasing(#[case] config: Value) {
        let rejection = valid_price_filter(&record(config)).expect_err("inverted range");
        assert!(matches!(rejection.reason, RejectionReason::InvalidRange { .. }));
    }

    #[rstest]
    fn filters_keep_order_and_drop_disabled_or_invalid() {
        let dates = json!({"schemaType": "dates", "enabled": false});
        let price = json!({"schemaType": "price", "min": 10, "max": 5});
        let keywords = json!({"key": "keywords", "schemaType": "keywords"});
        let (filters, captured) = logs::capture(|| valid_default_filters(&[&dates, &price, &keywords]));
        assert_eq!(filters, vec![DefaultFilter::Custom(record(keywords.clone()))]);
        assert_eq!(captured.at_level(Level::ERROR).len(), 1);
        assert!(captured.any_field_contains("filter", "price"));
    }
}
