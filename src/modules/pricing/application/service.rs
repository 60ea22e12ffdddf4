use std::sync::Arc;

use tracing::debug;

use crate::modules::pricing::application::dto::{
    ErrorNote, ErrorResult, GetSkuRequest, PriceNote, PricingOutcome, SearchNameRequest,
    SearchNote, SearchResult, SimplifiedItem, PUBLIC_SUBSET_INFO,
};
use crate::modules::pricing::config::{
    clamp_limit, clamp_pages, PricingConfig, DEFAULT_SEARCH_LIMIT, SKU_FALLBACK_LIMIT,
};
use crate::modules::pricing::domain::repositories::CatalogSource;
use crate::modules::pricing::domain::services::ProductMatcher;
use crate::modules::pricing::domain::value_objects::{
    resolve_currency, CachedCurrencyValidator, CurrencyRejection, CurrencyValidator,
};
use crate::shared::errors::AppResult;

/// Orchestrates the lookup pipeline: currency validation, direct SKU fetch,
/// fuzzy fallback, per-hit refinement, and alternate-currency enrichment.
///
/// Stateless across calls; one instance serves one tool invocation.
pub struct PricingService {
    catalog: Arc<dyn CatalogSource>,
    validator: Arc<dyn CurrencyValidator>,
    config: PricingConfig,
}

impl PricingService {
    pub fn new(catalog: Arc<dyn CatalogSource>, config: PricingConfig) -> Self {
        Self {
            catalog,
            validator: Arc::new(CachedCurrencyValidator::default()),
            config,
        }
    }

    pub fn with_validator(mut self, validator: Arc<dyn CurrencyValidator>) -> Self {
        self.validator = validator;
        self
    }

    /// Look up the price for a specific SKU, falling back to a fuzzy name
    /// search when the direct fetch misses.
    pub async fn get_sku(&self, request: GetSkuRequest) -> PricingOutcome {
        let currency = match self.resolve_currency(request.currency.as_deref()) {
            Ok(currency) => currency,
            Err(note) => {
                return PricingOutcome::Error(ErrorResult {
                    note,
                    error: None,
                    input: request.currency.clone(),
                    currency: None,
                })
            }
        };
        let pages = clamp_pages(
            request
                .max_pages
                .unwrap_or(i64::from(self.config.max_pages)),
        );

        let part_number = request.part_number.trim().to_string();
        if part_number.is_empty() {
            return PricingOutcome::error(ErrorNote::EmptyPartNumber);
        }

        match self.get_sku_inner(&part_number, &currency, pages).await {
            Ok(outcome) => outcome,
            Err(err) => PricingOutcome::Error(ErrorResult {
                note: ErrorNote::HttpError,
                error: Some(err.to_string()),
                input: Some(part_number),
                currency: Some(currency),
            }),
        }
    }

    async fn get_sku_inner(
        &self,
        part_number: &str,
        currency: &str,
        pages: u32,
    ) -> AppResult<PricingOutcome> {
        let direct = self.catalog.fetch_sku(part_number, currency).await?;
        if let Some(first) = direct.first() {
            let mut item = SimplifiedItem::from_catalog(first, Some(currency));
            if item.currency_code.is_none() {
                item.currency_code = Some(currency.to_string());
            }
            let item = self.enrich_with_alternate(item, part_number, currency).await;
            return Ok(PricingOutcome::Sku(item));
        }

        // Direct lookup missed: page through the catalog and match by name,
        // treating the part number as a query string.
        debug!(part_number, "sku miss, falling back to fuzzy name search");
        let catalog = self.catalog.fetch_catalog(currency, pages).await?;
        let hits = search_catalog(&catalog, part_number, SKU_FALLBACK_LIMIT, currency);
        Ok(PricingOutcome::Search(SearchResult {
            note: if hits.is_empty() {
                SearchNote::NotFound
            } else {
                SearchNote::MatchedByName
            },
            query: part_number.to_string(),
            currency: currency.to_string(),
            returned: hits.len(),
            items: hits,
            info: Some(PUBLIC_SUBSET_INFO.to_string()),
        }))
    }

    /// Search the price list by product-name keywords.
    pub async fn search_name(&self, request: SearchNameRequest) -> PricingOutcome {
        let query = request.query.trim().to_string();
        if query.is_empty() {
            return PricingOutcome::error(ErrorNote::EmptyQuery);
        }

        let currency = match self.resolve_currency(request.currency.as_deref()) {
            Ok(currency) => currency,
            Err(note) => {
                return PricingOutcome::Error(ErrorResult {
                    note,
                    error: None,
                    input: request.currency.clone(),
                    currency: None,
                })
            }
        };
        let limit = clamp_limit(request.limit.unwrap_or(DEFAULT_SEARCH_LIMIT));
        let pages = clamp_pages(
            request
                .max_pages
                .unwrap_or(i64::from(self.config.max_pages)),
        );

        match self
            .search_name_inner(&query, &currency, limit, pages, request.require_priced)
            .await
        {
            Ok(outcome) => outcome,
            Err(err) => PricingOutcome::Error(ErrorResult {
                note: ErrorNote::HttpError,
                error: Some(err.to_string()),
                input: Some(query),
                currency: Some(currency),
            }),
        }
    }

    async fn search_name_inner(
        &self,
        query: &str,
        currency: &str,
        limit: usize,
        pages: u32,
        require_priced: bool,
    ) -> AppResult<PricingOutcome> {
        let catalog = self.catalog.fetch_catalog(currency, pages).await?;
        let hits = search_catalog(&catalog, query, limit, currency);

        // Second pass: re-fetch each hit by part number so the price comes
        // from the authoritative per-SKU record in the requested currency.
        let mut refined = Vec::with_capacity(hits.len());
        for hit in hits {
            let item = self.refine_hit(hit, currency).await?;
            if require_priced && !has_positive_price(&item) {
                continue;
            }
            refined.push(item);
        }

        Ok(PricingOutcome::Search(SearchResult {
            query: query.to_string(),
            currency: currency.to_string(),
            returned: refined.len(),
            items: refined,
            note: SearchNote::FuzzyNameSearch,
            info: Some(PUBLIC_SUBSET_INFO.to_string()),
        }))
    }

    async fn refine_hit(&self, hit: SimplifiedItem, currency: &str) -> AppResult<SimplifiedItem> {
        let Some(part_number) = hit.part_number.clone() else {
            return Ok(hit);
        };

        let detail = self.catalog.fetch_sku(&part_number, currency).await?;
        let item = match detail.first() {
            Some(first) => {
                let mut item = SimplifiedItem::from_catalog(first, Some(currency));
                if item.currency_code.is_none() {
                    item.currency_code = Some(currency.to_string());
                }
                item
            }
            None => hit,
        };

        Ok(self.enrich_with_alternate(item, &part_number, currency).await)
    }

    /// Attach a reference price in the configured alternate currency when
    /// the requested one resolved to zero or nothing. Failures on this path
    /// are swallowed; the primary result is never put at risk.
    async fn enrich_with_alternate(
        &self,
        mut item: SimplifiedItem,
        part_number: &str,
        requested_currency: &str,
    ) -> SimplifiedItem {
        let Some(alt_currency) = self.config.alt_currency.as_deref() else {
            return item;
        };
        if !item.value_is_zero_or_missing() || alt_currency == requested_currency {
            return item;
        }

        match self.catalog.fetch_sku(part_number, alt_currency).await {
            Ok(alt_items) => {
                if let Some(first) = alt_items.first() {
                    let alternate = SimplifiedItem::from_catalog(first, Some(alt_currency));
                    if alternate.value.is_some() {
                        item.alt_currency_code = alternate.currency_code;
                        item.alt_model = alternate.model;
                        item.alt_value = alternate.value;
                        // Supersedes the provisional zero/missing annotation.
                        item.note = Some(PriceNote::ZeroSeeAlternate);
                    }
                }
                item
            }
            Err(err) => {
                debug!(part_number, %err, "alternate-currency enrichment failed");
                item
            }
        }
    }

    fn resolve_currency(&self, requested: Option<&str>) -> Result<String, ErrorNote> {
        resolve_currency(
            requested,
            &self.config.default_currency,
            self.validator.as_ref(),
        )
        .map_err(|rejection| match rejection {
            CurrencyRejection::InvalidFormat => ErrorNote::InvalidCurrencyFormat,
            CurrencyRejection::InvalidDefault => ErrorNote::InvalidDefaultCurrency,
        })
    }
}

/// Run the fuzzy matcher over a catalog slice, simplifying and
/// de-duplicating hits until `limit` results are collected.
fn search_catalog(
    items: &[crate::modules::pricing::domain::entities::CatalogItem],
    query: &str,
    limit: usize,
    currency: &str,
) -> Vec<SimplifiedItem> {
    let matcher = ProductMatcher::new(query);
    let mut results: Vec<SimplifiedItem> = Vec::new();
    for item in items {
        if !matcher.matches(item) {
            continue;
        }
        let simplified = SimplifiedItem::from_catalog(item, Some(currency));
        if results.contains(&simplified) {
            continue;
        }
        results.push(simplified);
        if results.len() >= limit {
            break;
        }
    }
    results
}

fn has_positive_price(item: &SimplifiedItem) -> bool {
    item.model.is_some() && matches!(item.value, Some(v) if v > 0.0)
}
