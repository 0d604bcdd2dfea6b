//! Validation outcome types.

use serde_json::Value;
use thiserror::Error;

/// Outcome of validating one property: the normalized fragment or the reason
/// it was rejected.
pub type Validated<T> = Result<T, Rejection>;

/// Why a value was rejected.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum RejectionReason {
    /// The value is not one of the accepted options.
    #[error("expected one of {}", .allowed.join(", "))]
    NotInSet {
        /// Accepted wire values.
        allowed: &'static [&'static str],
    },
    /// A boolean was expected.
    #[error("expected a boolean")]
    NotBoolean,
    /// A string was expected.
    #[error("expected a string")]
    NotString,
    /// A number was expected.
    #[error("expected a number")]
    NotNumber,
    /// An object was expected.
    #[error("expected an object")]
    NotObject,
    /// A list was expected.
    #[error("expected a list")]
    NotList,
    /// The value is required and has no default.
    #[error("value is required")]
    Missing,
    /// Another record declares the same key.
    #[error("key is not unique")]
    DuplicateKey,
    /// None of the referenced listing types are in use.
    #[error("no referenced listing type is in use")]
    NoListingTypesInUse,
    /// An option entry lacks a string `option` or `label`.
    #[error("every option needs a string option and label")]
    MalformedOption,
    /// A numeric range is empty or inverted.
    #[error("min ({min}) must be smaller than max ({max})")]
    InvalidRange {
        /// Lower bound as given.
        min: String,
        /// Upper bound as given.
        max: String,
    },
    /// A `W/H` aspect ratio could not be parsed.
    #[error("expected an aspect ratio such as 16/9")]
    InvalidAspectRatio,
    /// A colour is not a `#rgb` or `#rrggbb` hex string.
    #[error("expected a hex colour such as #7c3aed")]
    InvalidColor,
}

/// A rejected configuration property.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("unsupported value {value} for '{property}'")]
pub struct Rejection {
    /// Dotted path of the property, e.g. `filterConfig.filterType`.
    pub property: String,
    /// The offending value (`null` when the value was missing).
    pub value: Value,
    /// Why the value was rejected.
    #[source]
    pub reason: RejectionReason,
}

impl Rejection {
    /// Build a rejection for `property`.
    ///
    /// # Examples
    ///
    /// ```
    /// use marketplace_config::{Rejection, RejectionReason};
    /// use serde_json::json;
    ///
    /// let reason = RejectionReason::NotInSet { allowed: &["primary", "secondary"] };
    /// let rejection = Rejection::new("group", Some(&json!("tertiary")), reason);
    /// assert_eq!(rejection.property, "group");
    /// assert_eq!(rejection.value, json!("tertiary"));
    /// ```
    #[must_use]
    pub fn new(property: impl Into<String>, value: Option<&Value>, reason: RejectionReason) -> Self {
        Self {
            property: property.into(),
            value: value.cloned().unwrap_or(Value::Null),
            reason,
        }
    }

    /// Prefix the property path with `parent`, e.g. `filterType` becomes
    /// `filterConfig.filterType`.
    #[must_use]
    pub fn within(mut self, parent: &str) -> Self {
        self.property = format!("{parent}.{}", self.property);
        self
    }
}
