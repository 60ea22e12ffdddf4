use async_trait::async_trait;

use crate::modules::pricing::domain::entities::CatalogItem;
use crate::shared::errors::AppResult;

/// Port to the upstream price-list catalog.
///
/// Implementations own pagination and retry; callers only see flat item
/// lists. `fetch_catalog` is bounded by `max_pages`, so the returned
/// sequence is finite by construction.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the records filtered to one part number in one currency.
    async fn fetch_sku(&self, part_number: &str, currency: &str) -> AppResult<Vec<CatalogItem>>;

    /// Page through the full catalog in one currency, up to `max_pages`.
    async fn fetch_catalog(&self, currency: &str, max_pages: u32) -> AppResult<Vec<CatalogItem>>;
}
