//! Layout variants of the search page, listing page and listing images.
//!
//! Each slot accepts a closed set of variant types. A hosted variant is used
//! when it validates; otherwise the default variant is used, and when even
//! that is unusable a fixed fallback applies.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::RawRecord;
use crate::hosted::HostedConfig;
use crate::validate::{
    ClosedSet, Rejection, RejectionReason, Validated, closed_set, present, valid_enum,
};

/// Variant prefix used when the default listing image layout has none.
pub const DEFAULT_VARIANT_PREFIX: &str = "listing-card";

closed_set! {
    /// Search page layouts.
    pub enum SearchPageVariant {
        /// Results next to a map.
        Map => "map",
        /// Results in a grid.
        Grid => "grid",
    }
}

closed_set! {
    /// Listing page layouts.
    pub enum ListingPageVariant {
        /// Large cover photo above the details.
        CoverPhoto => "coverPhoto",
        /// Image carousel.
        Carousel => "carousel",
    }
}

closed_set! {
    /// Listing image layouts.
    pub enum ListingImageVariant {
        /// Images cropped to a fixed aspect ratio.
        CropImage => "cropImage",
    }
}

/// A page slot's selected variant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout<V> {
    /// Selected variant.
    pub variant_type: V,
    /// Further variant settings, carried unchanged.
    #[serde(flatten)]
    pub extra: RawRecord,
}

/// The listing image slot's selected variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingImageLayout {
    /// Selected variant.
    pub variant_type: ListingImageVariant,
    /// Aspect ratio as written, e.g. `4/3`.
    pub aspect_ratio: String,
    /// Width component of the aspect ratio.
    pub aspect_width: u32,
    /// Height component of the aspect ratio.
    pub aspect_height: u32,
    /// Prefix of the image variants requested for listing cards.
    pub variant_prefix: String,
}

/// Compiled-in layout; each slot is validated like a hosted one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutDefaults {
    /// Default search page variant.
    #[serde(default)]
    pub search_page: Value,
    /// Default listing page variant.
    #[serde(default)]
    pub listing_page: Value,
    /// Default listing image variant.
    #[serde(default)]
    pub listing_image: Value,
}

/// Merged layout.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Search page variant.
    pub search_page: PageLayout<SearchPageVariant>,
    /// Listing page variant.
    pub listing_page: PageLayout<ListingPageVariant>,
    /// Listing image variant.
    pub listing_image: ListingImageLayout,
}

/// Parse a `W/H` aspect ratio with positive integer components.
///
/// # Examples
///
/// ```
/// use marketplace_config::layout::parse_aspect_ratio;
///
/// assert_eq!(parse_aspect_ratio("16/9"), Some((16, 9)));
/// assert_eq!(parse_aspect_ratio("0/1"), None);
/// assert_eq!(parse_aspect_ratio("square"), None);
/// ```
#[must_use]
pub fn parse_aspect_ratio(ratio: &str) -> Option<(u32, u32)> {
    let (width_text, height_text) = ratio.split_once('/')?;
    let width: u32 = width_text.trim().parse().ok()?;
    let height: u32 = height_text.trim().parse().ok()?;
    (width > 0 && height > 0).then_some((width, height))
}

fn as_variant(value: &Value) -> Validated<&RawRecord> {
    value
        .as_object()
        .ok_or_else(|| Rejection::new("variantType", Some(value), RejectionReason::NotObject))
}

fn page_variant<V: ClosedSet>(value: &Value) -> Validated<PageLayout<V>> {
    let record = as_variant(value)?;
    Ok(PageLayout {
        variant_type: valid_enum("variantType", record.get("variantType"), None)?,
        extra: record
            .iter()
            .filter(|(name, _)| *name != "variantType")
            .map(|(name, entry)| (name.clone(), entry.clone()))
            .collect(),
    })
}

fn image_variant(value: &Value, variant_prefix: &str) -> Validated<ListingImageLayout> {
    let record = as_variant(value)?;
    let variant_type = valid_enum("variantType", record.get("variantType"), None)?;
    let ratio = record.get("aspectRatio");
    let aspect_ratio = ratio
        .and_then(Value::as_str)
        .ok_or_else(|| Rejection::new("aspectRatio", ratio, RejectionReason::NotString))?;
    let (aspect_width, aspect_height) = parse_aspect_ratio(aspect_ratio)
        .ok_or_else(|| Rejection::new("aspectRatio", ratio, RejectionReason::InvalidAspectRatio))?;
    Ok(ListingImageLayout {
        variant_type,
        aspect_ratio: aspect_ratio.to_owned(),
        aspect_width,
        aspect_height,
        variant_prefix: variant_prefix.to_owned(),
    })
}

/// Pick the first usable candidate for `slot`: the hosted variant if it
/// names a variant type, then the default, then `fallback`.
fn select<T>(
    slot: &str,
    hosted: Option<&Value>,
    default: &Value,
    parse: impl Fn(&Value) -> Validated<T>,
    fallback: impl FnOnce() -> T,
) -> T {
    let named = hosted.filter(|variant| present(variant.get("variantType")).is_some());
    for candidate in named.into_iter().chain(Some(default)) {
        match parse(candidate) {
            Ok(variant) => return variant,
            Err(rejection) => warn!(
                slot,
                property = %rejection.property,
                value = %rejection.value,
                reason = %rejection.reason,
                "Unsupported layout option detected"
            ),
        }
    }
    fallback()
}

/// Merge the hosted `layout` asset over the defaults.
///
/// # Examples
///
/// ```
/// use marketplace_config::HostedConfig;
/// use marketplace_config::layout::{LayoutDefaults, SearchPageVariant, merge_layouts};
/// use serde_json::json;
///
/// let defaults = LayoutDefaults {
///     search_page: json!({"variantType": "grid"}),
///     ..LayoutDefaults::default()
/// };
/// let asset = json!({"searchPage": {"variantType": "list"}});
/// let layout = merge_layouts(HostedConfig::new(&asset), &defaults);
/// assert_eq!(layout.search_page.variant_type, SearchPageVariant::Grid);
/// assert_eq!(layout.listing_image.aspect_width, 1);
/// ```
#[must_use]
pub fn merge_layouts(hosted: HostedConfig<'_>, defaults: &LayoutDefaults) -> LayoutConfig {
    let variant_prefix = defaults
        .listing_image
        .get("variantPrefix")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_VARIANT_PREFIX);

    LayoutConfig {
        search_page: select(
            "searchPage",
            hosted.get(&["searchPage"]),
            &defaults.search_page,
            page_variant,
            || PageLayout {
                variant_type: SearchPageVariant::Grid,
                extra: RawRecord::new(),
            },
        ),
        listing_page: select(
            "listingPage",
            hosted.get(&["listingPage"]),
            &defaults.listing_page,
            page_variant,
            || PageLayout {
                variant_type: ListingPageVariant::Carousel,
                extra: RawRecord::new(),
            },
        ),
        listing_image: select(
            "listingImage",
            hosted.get(&["listingImage"]),
            &defaults.listing_image,
            |value| image_variant(value, variant_prefix),
            || ListingImageLayout {
                variant_type: ListingImageVariant::CropImage,
                aspect_ratio: "1/1".to_owned(),
                aspect_width: 1,
                aspect_height: 1,
                variant_prefix: DEFAULT_VARIANT_PREFIX.to_owned(),
            },
        ),
    }
}
