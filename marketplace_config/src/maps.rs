//! Map provider selection.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::RawRecord;
use crate::hosted::HostedConfig;
use crate::validate::{ClosedSet, closed_set};

closed_set! {
    /// Supported map providers.
    pub enum MapProvider {
        /// Mapbox.
        Mapbox => "mapbox",
        /// Google Maps.
        GoogleMaps => "googleMaps",
    }
}

/// Map configuration, used both for the defaults and the merged result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapsConfig {
    /// Active provider.
    pub map_provider: MapProvider,
    /// Mapbox access token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapbox_access_token: Option<String>,
    /// Google Maps API key.
    #[serde(rename = "googleMapsAPIKey", default, skip_serializing_if = "Option::is_none")]
    pub google_maps_api_key: Option<String>,
    /// Other map settings (fallback location, search bounds...).
    #[serde(flatten)]
    pub extra: RawRecord,
}

fn hosted_text(hosted: HostedConfig<'_>, name: &str) -> Option<String> {
    hosted
        .str(&[name])
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}

/// Merge the hosted `maps` asset over the defaults.
///
/// Only `provider`, `mapboxAccessToken` and `googleMapsApiKey` are read from
/// the hosted asset, each overriding its default independently. An unknown
/// provider keeps the default one.
///
/// # Examples
///
/// ```
/// use marketplace_config::HostedConfig;
/// use marketplace_config::maps::{MapProvider, MapsConfig, merge_maps_config};
/// use serde_json::json;
///
/// let defaults = MapsConfig {
///     map_provider: MapProvider::Mapbox,
///     mapbox_access_token: Some("default-token".to_owned()),
///     google_maps_api_key: None,
///     extra: Default::default(),
/// };
/// let asset = json!({"provider": "googleMaps", "googleMapsApiKey": "hosted-key"});
/// let maps = merge_maps_config(HostedConfig::new(&asset), &defaults);
/// assert_eq!(maps.map_provider, MapProvider::GoogleMaps);
/// assert_eq!(maps.google_maps_api_key.as_deref(), Some("hosted-key"));
/// assert_eq!(maps.mapbox_access_token.as_deref(), Some("default-token"));
/// ```
#[must_use]
pub fn merge_maps_config(hosted: HostedConfig<'_>, defaults: &MapsConfig) -> MapsConfig {
    let map_provider = match hosted.get(&["provider"]) {
        None => defaults.map_provider,
        Some(value) => value
            .as_str()
            .and_then(MapProvider::from_wire)
            .unwrap_or_else(|| {
                warn!(
                    property = "provider",
                    value = %value,
                    allowed = ?MapProvider::OPTIONS,
                    "Unsupported map provider detected; using default"
                );
                defaults.map_provider
            }),
    };
    MapsConfig {
        map_provider,
        mapbox_access_token: hosted_text(hosted, "mapboxAccessToken")
            .or_else(|| defaults.mapbox_access_token.clone()),
        google_maps_api_key: hosted_text(hosted, "googleMapsApiKey")
            .or_else(|| defaults.google_maps_api_key.clone()),
        extra: defaults.extra.clone(),
    }
}
