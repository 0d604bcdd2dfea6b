//! Read-only view over an untrusted hosted asset bundle.

use serde_json::Value;

use crate::RawRecord;

/// A borrowed view of a hosted asset object.
///
/// Lookups never fail: anything that is missing, `null` or of the wrong shape
/// reads as absent. Non-object roots behave like an empty bundle.
///
/// # Examples
///
/// ```
/// use marketplace_config::HostedConfig;
/// use serde_json::json;
///
/// let asset = json!({"branding": {"logo": "https://cdn.example.com/logo.png", "favicon": null}});
/// let hosted = HostedConfig::new(&asset);
/// assert_eq!(hosted.str(&["branding", "logo"]), Some("https://cdn.example.com/logo.png"));
/// assert!(hosted.get(&["branding", "favicon"]).is_none());
/// assert!(hosted.section("layout").is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct HostedConfig<'a> {
    root: Option<&'a RawRecord>,
}

impl<'a> HostedConfig<'a> {
    /// Wrap a parsed hosted asset.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            root: value.as_object(),
        }
    }

    /// The value at `path`, treating `null` as absent.
    #[must_use]
    pub fn get(&self, path: &[&str]) -> Option<&'a Value> {
        let (last, parents) = path.split_last()?;
        let mut record = self.root?;
        for name in parents {
            record = record.get(*name)?.as_object()?;
        }
        record.get(*last).filter(|value| !value.is_null())
    }

    /// The value at `path`, also treating an empty string as absent.
    #[must_use]
    pub fn provided(&self, path: &[&str]) -> Option<&'a Value> {
        self.get(path)
            .filter(|value| value.as_str().is_none_or(|text| !text.is_empty()))
    }

    /// A sub-view rooted at the object `name`; empty when `name` is not an
    /// object.
    #[must_use]
    pub fn section(&self, name: &str) -> Self {
        Self {
            root: self.get(&[name]).and_then(Value::as_object),
        }
    }

    /// The string at `path`.
    #[must_use]
    pub fn str(&self, path: &[&str]) -> Option<&'a str> {
        self.get(path).and_then(Value::as_str)
    }

    /// The array at `path`.
    #[must_use]
    pub fn array(&self, path: &[&str]) -> Option<&'a [Value]> {
        self.get(path).and_then(Value::as_array).map(Vec::as_slice)
    }

    /// The underlying object, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&'a RawRecord> {
        self.root
    }

    /// Whether the view has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_none_or(RawRecord::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!(null))]
    #[case(json!([1, 2]))]
    #[case(json!("asset"))]
    #[case(json!({}))]
    fn non_object_roots_read_as_empty(#[case] asset: Value) {
        let hosted = HostedConfig::new(&asset);
        assert!(hosted.is_empty());
        assert!(hosted.get(&["branding"]).is_none());
    }

    #[rstest]
    fn lookups_stop_at_non_objects() {
        let asset = json!({"listingTypes": "daily", "search": {"mainSearch": {"searchType": "location"}}});
        let hosted = HostedConfig::new(&asset);
        assert!(hosted.array(&["listingTypes", "listingTypes"]).is_none());
        assert_eq!(hosted.section("search").str(&["mainSearch", "searchType"]), Some("location"));
        assert!(hosted.get(&[]).is_none());
    }

    #[rstest]
    fn empty_strings_are_not_provided() {
        let asset = json!({"branding": {"logo": "", "favicon": {"id": "favicon-1"}}});
        let hosted = HostedConfig::new(&asset);
        assert_eq!(hosted.get(&["branding", "logo"]), Some(&json!("")));
        assert!(hosted.provided(&["branding", "logo"]).is_none());
        assert!(hosted.provided(&["branding", "favicon"]).is_some());
    }
}
