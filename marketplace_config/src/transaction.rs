//! Transaction size limits.

use serde_json::Value;
use tracing::warn;

use crate::hosted::HostedConfig;

/// The hosted listing minimum price in currency subunits.
///
/// `hosted` is the hosted `transactionSize` asset. Its `listingMinimumPrice`
/// is used when its `type` is `subunit` and its `amount` is a positive
/// integer; anything else yields `default`.
///
/// # Examples
///
/// ```
/// use marketplace_config::HostedConfig;
/// use marketplace_config::transaction::listing_minimum_price;
/// use serde_json::json;
///
/// let asset = json!({"listingMinimumPrice": {"type": "subunit", "amount": 250}});
/// assert_eq!(listing_minimum_price(HostedConfig::new(&asset), 500), 250);
/// assert_eq!(listing_minimum_price(HostedConfig::default(), 500), 500);
/// ```
#[must_use]
pub fn listing_minimum_price(hosted: HostedConfig<'_>, default: u64) -> u64 {
    let Some(price) = hosted.get(&["listingMinimumPrice"]) else {
        return default;
    };
    let is_subunit = price.get("type").and_then(Value::as_str) == Some("subunit");
    match price.get("amount").and_then(Value::as_u64) {
        Some(amount) if is_subunit && amount > 0 => amount,
        _ => {
            warn!(
                property = "listingMinimumPrice",
                value = %price,
                "Unsupported listing minimum price detected; using default"
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[rstest]
    #[case(json!({"listingMinimumPrice": {"type": "subunit", "amount": 0}}))]
    #[case(json!({"listingMinimumPrice": {"type": "subunit", "amount": -5}}))]
    #[case(json!({"listingMinimumPrice": {"type": "subunit", "amount": 2.5}}))]
    #[case(json!({"listingMinimumPrice": {"type": "major", "amount": 10}}))]
    #[case(json!({"listingMinimumPrice": 10}))]
    fn unusable_prices_use_the_default(#[case] asset: Value) {
        assert_eq!(listing_minimum_price(HostedConfig::new(&asset), 500), 500);
    }
}
