use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::modules::pricing::config::PricingConfig;
use crate::modules::pricing::domain::entities::CatalogItem;
use crate::modules::pricing::domain::repositories::CatalogSource;
use crate::modules::pricing::infrastructure::external::retry::{with_retry, RetryPolicy};
use crate::shared::errors::{AppError, AppResult};

use super::dto::CatalogPage;

const USER_AGENT: &str = concat!("pricelens/", env!("CARGO_PKG_VERSION"));

/// HTTP adapter for the public price-list products endpoint.
///
/// Owns one HTTP session; a fresh client is built per tool invocation so
/// nothing is shared across concurrent calls.
pub struct CatalogClient {
    client: Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl CatalogClient {
    pub fn new(config: &PricingConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            retry: RetryPolicy::new(config.retries, config.backoff_base),
        })
    }

    /// One GET with retry. A body that fails JSON decoding is absorbed as an
    /// empty page; the catalog is a public subset and partial data is normal.
    async fn get_page(&self, url: &str, params: Option<&[(&str, &str)]>) -> AppResult<CatalogPage> {
        with_retry(|| self.attempt(url, params), &self.retry, "catalog page fetch").await
    }

    async fn attempt(&self, url: &str, params: Option<&[(&str, &str)]>) -> AppResult<CatalogPage> {
        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(params) = params {
            request = request.query(params);
        }

        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_server_error() {
            return Err(AppError::ExternalServiceError(format!(
                "server error: {}",
                status
            )));
        }
        if !status.is_success() {
            return Err(AppError::ApiError(format!("unexpected status: {}", status)));
        }

        let body = response.text().await.map_err(transport_error)?;
        match serde_json::from_str::<CatalogPage>(&body) {
            Ok(page) => Ok(page),
            Err(err) => {
                warn!(%err, "undecodable catalog page body, treating as empty");
                Ok(CatalogPage::default())
            }
        }
    }

    /// Resolve a possibly-relative `next` href against the endpoint origin.
    fn absolutize(&self, href: &str) -> String {
        if href.starts_with("http") {
            return href.to_string();
        }
        match reqwest::Url::parse(&self.endpoint).and_then(|base| base.join(href)) {
            Ok(url) => url.to_string(),
            Err(_) => href.to_string(),
        }
    }
}

/// Send and body-read failures (connect, timeout, protocol) are transient.
fn transport_error(err: reqwest::Error) -> AppError {
    AppError::ExternalServiceError(format!("request failed: {}", err))
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch_sku(&self, part_number: &str, currency: &str) -> AppResult<Vec<CatalogItem>> {
        let params = [("partNumber", part_number), ("currencyCode", currency)];
        let page = self.get_page(&self.endpoint, Some(&params)).await?;
        Ok(page.items)
    }

    async fn fetch_catalog(&self, currency: &str, max_pages: u32) -> AppResult<Vec<CatalogItem>> {
        let mut items = Vec::new();
        let mut url = self.endpoint.clone();
        let first_params = [("currencyCode", currency)];
        let mut params: Option<&[(&str, &str)]> = Some(&first_params);

        for page_index in 0..max_pages {
            let page = self.get_page(&url, params).await?;
            debug!(page_index, returned = page.items.len(), "fetched catalog page");

            let next = page.next_link().map(|href| self.absolutize(href));
            items.extend(page.items);

            match next {
                // Subsequent pages carry their own query string.
                Some(next_url) => {
                    url = next_url;
                    params = None;
                }
                None => break,
            }
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_for(endpoint: &str) -> CatalogClient {
        let config = PricingConfig {
            endpoint: endpoint.to_string(),
            ..PricingConfig::default()
        };
        CatalogClient::new(&config).unwrap()
    }

    #[test]
    fn absolute_hrefs_pass_through() {
        let client = client_for("https://example.com/api/v1/products/");
        assert_eq!(
            client.absolutize("https://other.example.com/page2"),
            "https://other.example.com/page2"
        );
    }

    #[test]
    fn relative_hrefs_are_resolved_against_the_endpoint_origin() {
        let client = client_for("https://example.com/api/v1/products/");
        assert_eq!(
            client.absolutize("/api/v1/products/?page=2"),
            "https://example.com/api/v1/products/?page=2"
        );
    }
}
