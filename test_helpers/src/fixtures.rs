//! Canonical hosted-asset documents used across test suites.
//!
//! The fixtures follow the wire shape operators edit in the hosted asset
//! store, not the normalized shape the merge produces.

use serde_json::{Value, json};

/// A hosted asset bundle with every mandatory asset present and valid.
#[must_use]
pub fn hosted_asset() -> Value {
    json!({
        "branding": {
            "marketplaceColors": {"mainColor": "#7c3aed"},
            "logo": "https://cdn.example.com/logo.png",
            "loginBackgroundImage": "https://cdn.example.com/background.jpg",
            "socialSharingImage": {
                "type": "imageAsset",
                "attributes": {
                    "variants": {
                        "scaled1200": {"url": "https://cdn.example.com/share-1200.jpg"},
                        "scaled600": {"url": "https://cdn.example.com/share-600.jpg"}
                    }
                }
            },
            "favicon": "https://cdn.example.com/favicon.png"
        },
        "layout": {
            "searchPage": {"variantType": "map"},
            "listingPage": {"variantType": "coverPhoto"},
            "listingImage": {"variantType": "cropImage", "aspectRatio": "4/3"}
        },
        "listingTypes": {"listingTypes": [hosted_listing_type()]},
        "listingFields": {"listingFields": [hosted_listing_field()]},
        "search": {
            "mainSearch": {"searchType": "location"},
            "dateRangeFilter": {"schemaType": "dates", "enabled": true, "dateRangeMode": "night"},
            "priceFilter": {"schemaType": "price", "enabled": true, "min": 0, "max": 500, "step": 10},
            "keywordsFilter": {"key": "keywords", "schemaType": "keywords"}
        },
        "maps": {
            "provider": "googleMaps",
            "googleMapsApiKey": "hosted-google-key"
        },
        "analytics": {
            "googleAnalytics": {"enabled": true, "measurementId": "G-HOSTED"}
        },
        "transactionSize": {
            "listingMinimumPrice": {"type": "subunit", "amount": 500}
        },
        "footer": {"copyright": "Example Marketplace"}
    })
}

/// A hosted listing type bound to the booking process.
#[must_use]
pub fn hosted_listing_type() -> Value {
    json!({
        "id": "daily-booking",
        "label": "Daily booking",
        "transactionProcess": {
            "name": "default-booking",
            "alias": "default-booking/release-1"
        },
        "unitType": "day"
    })
}

/// A hosted enum field with every nested block present.
#[must_use]
pub fn hosted_listing_field() -> Value {
    json!({
        "key": "gear",
        "scope": "public",
        "schemaType": "enum",
        "label": "Gear",
        "enumOptions": [
            {"option": "road", "label": "Road"},
            {"option": "mountain", "label": "Mountain"}
        ],
        "filterConfig": {"indexForSearch": true, "filterType": "SelectSingleFilter"},
        "showConfig": {"isDetail": true},
        "saveConfig": {"required": true, "placeholderMessage": "Pick a gear"}
    })
}
