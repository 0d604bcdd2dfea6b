//! Branding: marketplace colours, logos and social sharing images.
//!
//! Every branding property falls back to its default independently. The dark
//! and light colour variants are derived from the main colour by moving its
//! HSL lightness ten points down or up.

mod color;

pub use color::{Hsl, Rgb, hex_to_css_hsl};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::RawRecord;
use crate::hosted::HostedConfig;

/// Lightness offset of the derived colour variants, in percentage points.
pub const COLOR_VARIANT_OFFSET: i16 = 10;

/// An image given either as a plain URL or as a hosted image asset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageRef {
    /// Absolute or relative URL.
    Url(String),
    /// Hosted image asset object, carried unchanged.
    Asset(RawRecord),
}

/// Compiled-in branding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingDefaults {
    /// Main colour as a hex string.
    pub marketplace_color: String,
    /// Logo for wide screens.
    #[serde(rename = "logoImageDesktopURL", default)]
    pub logo_image_desktop_url: Option<String>,
    /// Logo for narrow screens.
    #[serde(rename = "logoImageMobileURL", default)]
    pub logo_image_mobile_url: Option<String>,
    /// Background of the authentication pages.
    #[serde(rename = "brandImageURL", default)]
    pub brand_image_url: Option<String>,
    /// Social sharing image for Facebook.
    #[serde(rename = "facebookImageURL", default)]
    pub facebook_image_url: Option<String>,
    /// Social sharing image for Twitter.
    #[serde(rename = "twitterImageURL", default)]
    pub twitter_image_url: Option<String>,
    /// Favicon.
    #[serde(rename = "faviconURL", default)]
    pub favicon_url: Option<String>,
}

/// Merged branding.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingConfig {
    /// Main colour as a hex string.
    pub marketplace_color: String,
    /// Darker variant of the main colour as a CSS `hsl()` string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_color_dark: Option<String>,
    /// Lighter variant of the main colour as a CSS `hsl()` string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketplace_color_light: Option<String>,
    /// Logo for wide screens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image_desktop: Option<ImageRef>,
    /// Logo for narrow screens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image_mobile: Option<ImageRef>,
    /// Background of the authentication pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_image: Option<ImageRef>,
    /// Social sharing image for Facebook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook_image: Option<String>,
    /// Social sharing image for Twitter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter_image: Option<String>,
    /// Favicon.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<ImageRef>,
}

/// URL of the image asset variant `variant`, if `image` is a hosted image
/// asset that has it.
///
/// # Examples
///
/// ```
/// use marketplace_config::branding::variant_url;
/// use serde_json::json;
///
/// let asset = json!({
///     "type": "imageAsset",
///     "attributes": {"variants": {"scaled600": {"url": "https://cdn.example.com/600.jpg"}}}
/// });
/// assert_eq!(variant_url(Some(&asset), "scaled600"), Some("https://cdn.example.com/600.jpg"));
/// assert_eq!(variant_url(Some(&asset), "scaled1200"), None);
/// assert_eq!(variant_url(Some(&json!("https://cdn.example.com/x.jpg")), "scaled600"), None);
/// ```
#[must_use]
pub fn variant_url<'a>(image: Option<&'a Value>, variant: &str) -> Option<&'a str> {
    let asset = image?.as_object()?;
    if asset.get("type").and_then(Value::as_str) != Some("imageAsset") {
        return None;
    }
    asset
        .get("attributes")?
        .get("variants")?
        .get(variant)?
        .get("url")?
        .as_str()
}

fn hosted_image(hosted: HostedConfig<'_>, name: &str) -> Option<ImageRef> {
    let value = hosted.provided(&[name])?;
    match serde_json::from_value(value.clone()) {
        Ok(image) => Some(image),
        Err(_) => {
            warn!(
                property = name,
                value = %value,
                "Unsupported branding image detected; using default"
            );
            None
        }
    }
}

fn main_color(hosted: HostedConfig<'_>, default: &str) -> String {
    let Some(value) = hosted.get(&["marketplaceColors", "mainColor"]) else {
        return default.to_owned();
    };
    match value.as_str() {
        Some(hex) if Rgb::from_hex(hex).is_some() => hex.to_owned(),
        _ => {
            warn!(
                property = "marketplaceColors.mainColor",
                value = %value,
                "Unsupported marketplace colour detected; using default"
            );
            default.to_owned()
        }
    }
}

/// Merge hosted branding over the defaults.
///
/// `hosted` is the hosted `branding` asset.
#[must_use]
pub fn merge_branding(hosted: HostedConfig<'_>, defaults: &BrandingDefaults) -> BrandingConfig {
    let marketplace_color = main_color(hosted, &defaults.marketplace_color);
    let logo = hosted_image(hosted, "logo");
    let social = hosted.get(&["socialSharingImage"]);
    let default_url = |url: &Option<String>| url.clone().map(ImageRef::Url);

    BrandingConfig {
        marketplace_color_dark: hex_to_css_hsl(&marketplace_color, -COLOR_VARIANT_OFFSET),
        marketplace_color_light: hex_to_css_hsl(&marketplace_color, COLOR_VARIANT_OFFSET),
        logo_image_desktop: logo
            .clone()
            .or_else(|| default_url(&defaults.logo_image_desktop_url)),
        logo_image_mobile: logo.or_else(|| default_url(&defaults.logo_image_mobile_url)),
        brand_image: hosted_image(hosted, "loginBackgroundImage")
            .or_else(|| default_url(&defaults.brand_image_url)),
        facebook_image: variant_url(social, "scaled1200")
            .map(str::to_owned)
            .or_else(|| defaults.facebook_image_url.clone()),
        twitter_image: variant_url(social, "scaled600")
            .map(str::to_owned)
            .or_else(|| defaults.twitter_image_url.clone()),
        favicon: hosted_image(hosted, "favicon").or_else(|| default_url(&defaults.favicon_url)),
        marketplace_color,
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};
    use serde_json::json;
    use test_helpers::{fixtures, logs};

    use super::*;

    #[fixture]
    fn defaults() -> BrandingDefaults {
        BrandingDefaults {
            marketplace_color: "#FF0000".to_owned(),
            logo_image_desktop_url: Some("/static/logo-desktop.png".to_owned()),
            logo_image_mobile_url: Some("/static/logo-mobile.png".to_owned()),
            brand_image_url: Some("/static/background.jpg".to_owned()),
            facebook_image_url: Some("/static/facebook.jpg".to_owned()),
            twitter_image_url: Some("/static/twitter.jpg".to_owned()),
            favicon_url: None,
        }
    }

    #[rstest]
    fn absent_branding_uses_every_default(defaults: BrandingDefaults) {
        let merged = merge_branding(HostedConfig::default(), &defaults);
        assert_eq!(merged.marketplace_color, "#FF0000");
        assert_eq!(merged.marketplace_color_dark.as_deref(), Some("hsl(0, 100%, 40%)"));
        assert_eq!(merged.marketplace_color_light.as_deref(), Some("hsl(0, 100%, 60%)"));
        assert_eq!(
            merged.logo_image_mobile,
            Some(ImageRef::Url("/static/logo-mobile.png".to_owned()))
        );
        assert_eq!(merged.twitter_image.as_deref(), Some("/static/twitter.jpg"));
        assert_eq!(merged.favicon, None);
    }

    #[rstest]
    fn hosted_values_override_independently(defaults: BrandingDefaults) {
        let asset = fixtures::hosted_asset();
        let hosted = HostedConfig::new(&asset).section("branding");
        let merged = merge_branding(hosted, &defaults);
        let logo = Some(ImageRef::Url("https://cdn.example.com/logo.png".to_owned()));
        assert_eq!(merged.logo_image_desktop, logo);
        assert_eq!(merged.logo_image_mobile, logo);
        assert_eq!(
            merged.facebook_image.as_deref(),
            Some("https://cdn.example.com/share-1200.jpg")
        );
        assert_eq!(merged.marketplace_color, "#7c3aed");
    }

    #[rstest]
    fn url_social_images_fall_back_to_defaults(defaults: BrandingDefaults) {
        let asset = json!({"socialSharingImage": "https://cdn.example.com/share.jpg"});
        let merged = merge_branding(HostedConfig::new(&asset), &defaults);
        assert_eq!(merged.facebook_image.as_deref(), Some("/static/facebook.jpg"));
    }

    #[rstest]
    #[case(json!({"marketplaceColors": {"mainColor": "tomato"}}))]
    #[case(json!({"marketplaceColors": {"mainColor": 42}}))]
    fn unusable_colours_fall_back_with_a_warning(defaults: BrandingDefaults, #[case] asset: Value) {
        let (merged, captured) = logs::capture(|| merge_branding(HostedConfig::new(&asset), &defaults));
        assert_eq!(merged.marketplace_color, "#FF0000");
        assert!(captured.any_field_contains("property", "mainColor"));
    }

    #[rstest]
    fn image_assets_are_carried_verbatim(defaults: BrandingDefaults) {
        let asset = json!({"favicon": {"type": "imageAsset", "id": "favicon-1"}, "logo": 7});
        let (merged, captured) = logs::capture(|| merge_branding(HostedConfig::new(&asset), &defaults));
        let Some(ImageRef::Asset(favicon)) = merged.favicon else {
            panic!("favicon should be an image asset");
        };
        assert_eq!(favicon.get("id"), Some(&json!("favicon-1")));
        assert_eq!(
            merged.logo_image_desktop,
            Some(ImageRef::Url("/static/logo-desktop.png".to_owned()))
        );
        assert!(captured.any_field_contains("property", "logo"));
    }

    #[rstest]
    fn empty_logo_keeps_the_default_logos(defaults: BrandingDefaults) {
        let asset = json!({"logo": ""});
        let (merged, captured) = logs::capture(|| merge_branding(HostedConfig::new(&asset), &defaults));
        assert_eq!(
            merged.logo_image_desktop,
            Some(ImageRef::Url("/static/logo-desktop.png".to_owned()))
        );
        assert_eq!(
            merged.logo_image_mobile,
            Some(ImageRef::Url("/static/logo-mobile.png".to_owned()))
        );
        assert!(!captured.any_field_contains("property", "logo"));
    }
}
