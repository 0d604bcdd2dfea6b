//! Generic checks shared by the field-level validators.

use serde_json::Value;

use super::{ClosedSet, Rejection, RejectionReason, Validated};

/// Treat JSON `null` the same as an absent property.
#[must_use]
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Validate an enumerated string.
///
/// A value is accepted when it is one of `E::OPTIONS`, or when it is unset and
/// a `default` is supplied.
///
/// # Errors
///
/// Returns a [`Rejection`] for `key` when the value is outside the set, or when
/// it is unset without a default.
///
/// # Examples
///
/// ```
/// use marketplace_config::listing::FilterGroup;
/// use marketplace_config::validate::valid_enum;
/// use serde_json::json;
///
/// let group = valid_enum("group", None, Some(FilterGroup::Primary));
/// assert_eq!(group, Ok(FilterGroup::Primary));
/// assert!(valid_enum::<FilterGroup>("group", Some(&json!("tertiary")), None).is_err());
/// ```
pub fn valid_enum<E: ClosedSet>(key: &str, value: Option<&Value>, default: Option<E>) -> Validated<E> {
    match present(value) {
        Some(Value::String(text)) => E::from_wire(text).ok_or_else(|| not_in_set::<E>(key, value)),
        Some(_) => Err(not_in_set::<E>(key, value)),
        None => default.ok_or_else(|| Rejection::new(key, value, RejectionReason::Missing)),
    }
}

fn not_in_set<E: ClosedSet>(key: &str, value: Option<&Value>) -> Rejection {
    Rejection::new(
        key,
        value,
        RejectionReason::NotInSet {
            allowed: E::OPTIONS,
        },
    )
}

/// Validate a boolean, falling back to `default` when unset.
///
/// # Errors
///
/// Returns a [`Rejection`] for `key` when the value is not a boolean, or when
/// it is unset without a default.
pub fn valid_boolean(key: &str, value: Option<&Value>, default: Option<bool>) -> Validated<bool> {
    match present(value) {
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(Rejection::new(key, value, RejectionReason::NotBoolean)),
        None => default.ok_or_else(|| Rejection::new(key, value, RejectionReason::Missing)),
    }
}

/// Validate an optional string property.
///
/// # Errors
///
/// Returns a [`Rejection`] for `key` when the value is set but not a string.
pub fn valid_optional_string(key: &str, value: Option<&Value>) -> Validated<Option<String>> {
    match present(value) {
        Some(Value::String(text)) => Ok(Some(text.clone())),
        Some(_) => Err(Rejection::new(key, value, RejectionReason::NotString)),
        None => Ok(None),
    }
}

/// Validate a label. An unset label is legitimately absent and yields `None`.
///
/// # Errors
///
/// Returns a [`Rejection`] when the label is set but not a string.
pub fn valid_label(value: Option<&Value>) -> Validated<Option<String>> {
    valid_optional_string("label", value)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::listing::{FilterGroup, SchemaType};

    #[rstest]
    #[case(json!("enum"), SchemaType::Enum)]
    #[case(json!("multi-enum"), SchemaType::MultiEnum)]
    #[case(json!("long"), SchemaType::Long)]
    fn enum_accepts_known_options(#[case] input: Value, #[case] expected: SchemaType) {
        assert_eq!(valid_enum("schemaType", Some(&input), None), Ok(expected));
    }

    #[rstest]
    #[case(Some(json!("date")))]
    #[case(Some(json!(3)))]
    #[case(None)]
    fn enum_without_default_rejects_unknown_or_unset(#[case] input: Option<Value>) {
        let outcome = valid_enum::<SchemaType>("schemaType", input.as_ref(), None);
        let rejection = outcome.expect_err("value must be rejected");
        assert_eq!(rejection.property, "schemaType");
    }

    #[rstest]
    fn enum_default_only_applies_when_unset() {
        assert_eq!(
            valid_enum("group", Some(&Value::Null), Some(FilterGroup::Primary)),
            Ok(FilterGroup::Primary)
        );
        assert!(valid_enum("group", Some(&json!("tertiary")), Some(FilterGroup::Primary)).is_err());
    }

    #[rstest]
    #[case(Some(json!(true)), Some(false), Ok(true))]
    #[case(None, Some(false), Ok(false))]
    #[case(None, Some(true), Ok(true))]
    fn boolean_uses_value_then_default(
        #[case] input: Option<Value>,
        #[case] default: Option<bool>,
        #[case] expected: Result<bool, ()>,
    ) {
        let outcome = valid_boolean("isDetail", input.as_ref(), default).map_err(|_| ());
        assert_eq!(outcome, expected);
    }

    #[rstest]
    fn boolean_rejects_truthy_strings() {
        let rejection = valid_boolean("indexForSearch", Some(&json!("true")), Some(false))
            .expect_err("strings are not booleans");
        assert_eq!(rejection.reason, RejectionReason::NotBoolean);
        assert_eq!(rejection.value, json!("true"));
    }

    #[rstest]
    fn boolean_without_default_requires_value() {
        assert!(valid_boolean("enabled", None, None).is_err());
    }

    #[rstest]
    fn label_is_optional_but_must_be_text() {
        assert_eq!(valid_label(None), Ok(None));
        assert_eq!(valid_label(Some(&json!("Colour"))), Ok(Some("Colour".to_owned())));
        assert!(valid_label(Some(&json!(["Colour"]))).is_err());
    }
}
