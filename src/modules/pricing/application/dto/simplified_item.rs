use serde::{Deserialize, Serialize};

use crate::modules::pricing::domain::entities::CatalogItem;
use crate::modules::pricing::domain::services::price_selector::{coerce_value, select_price};

/// Annotation attached to an item whose price needs qualification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceNote {
    /// No model/value pair exists for the item in the public subset or the
    /// requested currency.
    #[serde(rename = "no-unit-price-in-public-subset-or-currency")]
    NoUnitPrice,
    /// A pair exists but the value is zero (free tier or bundled pricing).
    #[serde(rename = "zero-price-or-free-tier-only")]
    ZeroOrFreeTier,
    /// The requested currency priced at zero/missing; the alt* fields carry
    /// a reference price in the configured alternate currency.
    #[serde(rename = "zero-in-requested-currency-see-alt")]
    ZeroSeeAlternate,
}

/// The client-facing shape of one catalog item: a single resolved
/// (currency, model, value) plus optional annotations.
///
/// Built fresh per response and never mutated afterwards except by the
/// alternate-currency enricher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimplifiedItem {
    pub part_number: Option<String>,
    pub display_name: Option<String>,
    pub metric_name: Option<String>,
    pub service_category: Option<String>,
    pub currency_code: Option<String>,
    pub model: Option<String>,
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<PriceNote>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_value: Option<f64>,
}

impl SimplifiedItem {
    /// Shape a catalog item for clients.
    ///
    /// Picks the price pair for the preferred currency when possible, falls
    /// back to the preferred code itself when no block named a currency, and
    /// annotates missing or zero unit prices.
    pub fn from_catalog(item: &CatalogItem, prefer_currency: Option<&str>) -> Self {
        let selected = select_price(item, prefer_currency);

        let currency_code = selected
            .currency_code
            .or_else(|| prefer_currency.map(str::to_string));
        let value = selected.raw_value.as_ref().and_then(coerce_value);

        let note = if selected.model.is_none() || value.is_none() {
            Some(PriceNote::NoUnitPrice)
        } else if value == Some(0.0) {
            Some(PriceNote::ZeroOrFreeTier)
        } else {
            None
        };

        Self {
            part_number: item.part_number.clone(),
            display_name: item.display_name.clone(),
            metric_name: item.metric_name.clone(),
            service_category: item.service_category.clone(),
            currency_code,
            model: selected.model,
            value,
            note,
            alt_currency_code: None,
            alt_model: None,
            alt_value: None,
        }
    }

    /// Whether the resolved price is absent or zero, the trigger for
    /// alternate-currency enrichment.
    pub fn value_is_zero_or_missing(&self) -> bool {
        match self.value {
            None => true,
            Some(v) => v == 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog_item(raw: serde_json::Value) -> CatalogItem {
        serde_json::from_value(raw).unwrap()
    }

    #[test]
    fn priced_item_carries_no_note() {
        let item = catalog_item(json!({
            "partNumber": "B93113",
            "displayName": "Autonomous Database Serverless",
            "metricName": "ECPU Hour",
            "serviceCategory": "Database",
            "currencyCodeLocalizations": [
                {"currencyCode": "JPY", "prices": [{"model": "perUnit", "value": 12.5}]}
            ]
        }));
        let simplified = SimplifiedItem::from_catalog(&item, Some("JPY"));
        assert_eq!(simplified.currency_code.as_deref(), Some("JPY"));
        assert_eq!(simplified.model.as_deref(), Some("perUnit"));
        assert_eq!(simplified.value, Some(12.5));
        assert!(simplified.note.is_none());
    }

    #[test]
    fn missing_price_is_annotated() {
        let item = catalog_item(json!({"partNumber": "B90000", "displayName": "Thing"}));
        let simplified = SimplifiedItem::from_catalog(&item, Some("USD"));
        assert_eq!(simplified.value, None);
        assert_eq!(simplified.note, Some(PriceNote::NoUnitPrice));
        // The currency code is filled from the preference even without blocks.
        assert_eq!(simplified.currency_code.as_deref(), Some("USD"));
    }

    #[test]
    fn zero_price_is_annotated() {
        let item = catalog_item(json!({
            "partNumber": "B90001",
            "prices": [{"currencyCode": "USD", "prices": [{"model": "perUnit", "value": 0.0}]}]
        }));
        let simplified = SimplifiedItem::from_catalog(&item, Some("USD"));
        assert_eq!(simplified.value, Some(0.0));
        assert_eq!(simplified.note, Some(PriceNote::ZeroOrFreeTier));
    }

    #[test]
    fn malformed_value_behaves_as_missing() {
        let item = catalog_item(json!({
            "partNumber": "B90002",
            "prices": [{"currencyCode": "USD", "prices": [{"model": "perUnit", "value": "n/a"}]}]
        }));
        let simplified = SimplifiedItem::from_catalog(&item, Some("USD"));
        assert_eq!(simplified.value, None);
        assert_eq!(simplified.note, Some(PriceNote::NoUnitPrice));
        assert_eq!(simplified.model.as_deref(), Some("perUnit"));
    }

    #[test]
    fn fallback_block_keeps_its_own_currency() {
        let item = catalog_item(json!({
            "partNumber": "B90003",
            "prices": [{"currencyCode": "EUR", "prices": [{"model": "flat", "value": 2.0}]}]
        }));
        let simplified = SimplifiedItem::from_catalog(&item, Some("JPY"));
        assert_eq!(simplified.currency_code.as_deref(), Some("EUR"));
        assert_eq!(simplified.value, Some(2.0));
    }

    #[test]
    fn simplification_is_pure() {
        let item = catalog_item(json!({
            "partNumber": "B90004",
            "prices": [{"currencyCode": "USD", "prices": [{"model": "perUnit", "value": 1.0}]}]
        }));
        let first = SimplifiedItem::from_catalog(&item, Some("USD"));
        let second = SimplifiedItem::from_catalog(&item, Some("USD"));
        assert_eq!(first, second);
    }

    #[test]
    fn wire_shape_is_camel_case_and_omits_empty_notes() {
        let item = catalog_item(json!({
            "partNumber": "B90005",
            "displayName": "Block Volume",
            "prices": [{"currencyCode": "USD", "prices": [{"model": "perUnit", "value": 0.0255}]}]
        }));
        let rendered =
            serde_json::to_value(SimplifiedItem::from_catalog(&item, Some("USD"))).unwrap();
        assert_eq!(rendered["partNumber"], "B90005");
        assert_eq!(rendered["currencyCode"], "USD");
        assert!(rendered.get("note").is_none());
        assert!(rendered.get("altCurrencyCode").is_none());
    }

    #[test]
    fn zero_or_missing_trigger() {
        let mut simplified = SimplifiedItem::from_catalog(
            &catalog_item(json!({"partNumber": "B90006"})),
            Some("USD"),
        );
        assert!(simplified.value_is_zero_or_missing());
        simplified.value = Some(0.0);
        assert!(simplified.value_is_zero_or_missing());
        simplified.value = Some(0.01);
        assert!(!simplified.value_is_zero_or_missing());
    }
}
