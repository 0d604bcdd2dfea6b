//! Analytics identifiers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::hosted::HostedConfig;

/// Analytics configuration, used both for the defaults and the merged result.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsConfig {
    /// Google Analytics measurement id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_analytics_id: Option<String>,
}

/// Merge the hosted `analytics` asset over the defaults.
///
/// The hosted measurement id is used only when `googleAnalytics.enabled` is
/// `true` and `googleAnalytics.measurementId` is a non-empty string.
///
/// # Examples
///
/// ```
/// use marketplace_config::HostedConfig;
/// use marketplace_config::analytics::{AnalyticsConfig, merge_analytics_config};
/// use serde_json::json;
///
/// let defaults = AnalyticsConfig { google_analytics_id: Some("G-DEFAULT".to_owned()) };
/// let disabled = json!({"googleAnalytics": {"enabled": false, "measurementId": "G-HOSTED"}});
/// let merged = merge_analytics_config(HostedConfig::new(&disabled), &defaults);
/// assert_eq!(merged.google_analytics_id.as_deref(), Some("G-DEFAULT"));
/// ```
#[must_use]
pub fn merge_analytics_config(
    hosted: HostedConfig<'_>,
    defaults: &AnalyticsConfig,
) -> AnalyticsConfig {
    let enabled = hosted
        .get(&["googleAnalytics", "enabled"])
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let measurement_id = hosted
        .str(&["googleAnalytics", "measurementId"])
        .filter(|id| enabled && !id.is_empty());
    AnalyticsConfig {
        google_analytics_id: measurement_id
            .map(str::to_owned)
            .or_else(|| defaults.google_analytics_id.clone()),
    }
}
