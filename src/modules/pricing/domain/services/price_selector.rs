use serde_json::Value;

use crate::modules::pricing::domain::entities::{CatalogItem, PriceBlock};

/// The (model, value, currency) pick for one catalog item.
///
/// `model` can be present while the raw value fails numeric coercion; the
/// caller decides how to annotate that.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectedPrice {
    pub model: Option<String>,
    pub raw_value: Option<Value>,
    pub currency_code: Option<String>,
}

/// Select a price pair from an item's merged price blocks.
///
/// The preferred currency's block wins when it has a complete pair;
/// otherwise the first complete pair of any currency is taken, and the
/// returned currency code reflects the block it actually came from.
pub fn select_price(item: &CatalogItem, prefer_currency: Option<&str>) -> SelectedPrice {
    if let Some(prefer) = prefer_currency {
        let preferred = item
            .price_blocks()
            .filter(|block| block.currency_code.as_deref() == Some(prefer))
            .find_map(first_complete_pair);
        if let Some(selected) = preferred {
            return selected;
        }
    }

    item.price_blocks()
        .find_map(first_complete_pair)
        .unwrap_or_default()
}

fn first_complete_pair(block: &PriceBlock) -> Option<SelectedPrice> {
    block.prices.iter().find_map(|entry| {
        let model = entry.model.as_ref()?;
        let value = entry.value.as_ref().filter(|v| !v.is_null())?;
        Some(SelectedPrice {
            model: Some(model.clone()),
            raw_value: Some(value.clone()),
            currency_code: block.currency_code.clone(),
        })
    })
}

/// Coerce a raw JSON price value to a number the way a lenient reader would:
/// JSON numbers directly, numeric strings by parsing. Anything else is
/// treated as missing.
pub fn coerce_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
