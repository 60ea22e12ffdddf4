use serde::{Deserialize, Serialize};

use super::simplified_item::SimplifiedItem;

/// Reminder attached to search results: the upstream catalog is a public
/// subset, so empty result sets are expected rather than erroneous.
pub const PUBLIC_SUBSET_INFO: &str =
    "the price list is a public subset; empty items can be expected";

/// How a search result set was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchNote {
    /// A SKU lookup missed and fell back to name matching.
    #[serde(rename = "matched-by-name")]
    MatchedByName,
    /// Neither direct lookup nor fuzzy matching found anything.
    #[serde(rename = "not-found")]
    NotFound,
    /// A regular name search, prices refined per SKU.
    #[serde(rename = "fuzzy-name-search")]
    FuzzyNameSearch,
}

/// Why an operation was rejected or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorNote {
    #[serde(rename = "invalid-currency-format")]
    InvalidCurrencyFormat,
    #[serde(rename = "invalid-default-currency")]
    InvalidDefaultCurrency,
    #[serde(rename = "empty-part-number")]
    EmptyPartNumber,
    #[serde(rename = "empty-query")]
    EmptyQuery,
    #[serde(rename = "http-error")]
    HttpError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub query: String,
    pub currency: String,
    pub returned: usize,
    pub items: Vec<SimplifiedItem>,
    pub note: SearchNote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResult {
    pub note: ErrorNote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

/// Every public pricing operation resolves to one of these; errors are
/// shaped results, never exceptions crossing the operation boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum PricingOutcome {
    #[serde(rename = "sku")]
    Sku(SimplifiedItem),
    #[serde(rename = "search")]
    Search(SearchResult),
    #[serde(rename = "error")]
    Error(ErrorResult),
}

impl PricingOutcome {
    pub fn error(note: ErrorNote) -> Self {
        Self::Error(ErrorResult {
            note,
            error: None,
            input: None,
            currency: None,
        })
    }
}
