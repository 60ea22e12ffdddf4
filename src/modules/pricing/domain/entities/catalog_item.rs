use serde::{Deserialize, Serialize};

/// One priced product record as the upstream catalog returns it.
///
/// Every field is optional: the catalog is a public subset and records are
/// routinely partial. Consumed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub part_number: Option<String>,
    pub display_name: Option<String>,
    pub metric_name: Option<String>,
    pub service_category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<PriceBlock>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub currency_code_localizations: Vec<PriceBlock>,
}

/// A currency-scoped list of (model, value) pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBlock {
    pub currency_code: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub prices: Vec<PriceEntry>,
}

/// A single pricing-model/value pair. The value is kept as raw JSON and
/// coerced to a number downstream; a malformed value behaves as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceEntry {
    pub model: Option<String>,
    pub value: Option<serde_json::Value>,
}

impl CatalogItem {
    /// The upstream exposes price blocks under two differently-named
    /// collections. This is the single seam that merges both shapes into one
    /// ordered sequence; nothing downstream sees the schema variance.
    pub fn price_blocks(&self) -> impl Iterator<Item = &PriceBlock> {
        self.prices
            .iter()
            .chain(self.currency_code_localizations.iter())
    }

    /// All searchable text of the record, in a fixed field order, for
    /// symmetric normalization against query text.
    pub fn combined_text(&self) -> String {
        [
            self.display_name.as_deref(),
            self.service_category.as_deref(),
            self.metric_name.as_deref(),
            self.part_number.as_deref(),
        ]
        .iter()
        .map(|field| field.unwrap_or(""))
        .collect::<Vec<_>>()
        .join(" ")
    }
}
