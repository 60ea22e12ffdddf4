use std::time::Duration;

/// Public price-list products endpoint (cetools). The catalog it serves is a
/// public subset: empty pages and missing prices are normal, not errors.
pub const DEFAULT_ENDPOINT: &str = "https://apexapps.oracle.com/pls/apex/cetools/api/v1/products/";

pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_MAX_PAGES: u32 = 6;
pub const DEFAULT_TIMEOUT_SECS: f64 = 25.0;
pub const DEFAULT_RETRIES: u32 = 2;
pub const DEFAULT_BACKOFF_SECS: f64 = 0.5;

/// Default and hard cap for the number of results a name search returns.
pub const DEFAULT_SEARCH_LIMIT: i64 = 12;
pub const MAX_SEARCH_LIMIT: i64 = 20;

/// Result cap for the fuzzy fallback inside a SKU lookup.
pub const SKU_FALLBACK_LIMIT: usize = 12;

pub const MIN_PAGES: i64 = 1;
pub const MAX_PAGES: i64 = 10;

/// Environment-driven defaults for the pricing tools.
///
/// Every field can be overridden through `PRICELENS_*` variables so a host
/// can tune the server without rebuilding it; per-call arguments take
/// precedence over these where the operation accepts them.
#[derive(Debug, Clone)]
pub struct PricingConfig {
    pub endpoint: String,
    pub default_currency: String,
    pub max_pages: u32,
    pub http_timeout: Duration,
    pub retries: u32,
    pub backoff_base: Duration,
    /// Reference currency attached when the requested one prices at zero.
    pub alt_currency: Option<String>,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            default_currency: DEFAULT_CURRENCY.to_string(),
            max_pages: DEFAULT_MAX_PAGES,
            http_timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
            retries: DEFAULT_RETRIES,
            backoff_base: Duration::from_secs_f64(DEFAULT_BACKOFF_SECS),
            alt_currency: None,
        }
    }
}

impl PricingConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let default_currency = get("PRICELENS_DEFAULT_CCY")
            .map(|v| v.trim().to_uppercase())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.default_currency);

        let max_pages = get("PRICELENS_MAX_PAGES")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .map(clamp_pages)
            .unwrap_or(defaults.max_pages);

        let http_timeout = get("PRICELENS_HTTP_TIMEOUT")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| *v > 0.0)
            .map(Duration::from_secs_f64)
            .unwrap_or(defaults.http_timeout);

        let retries = get("PRICELENS_RETRIES")
            .and_then(|v| v.trim().parse::<u32>().ok())
            .unwrap_or(defaults.retries);

        let backoff_base = get("PRICELENS_BACKOFF")
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| *v > 0.0)
            .map(Duration::from_secs_f64)
            .unwrap_or(defaults.backoff_base);

        let alt_currency = get("PRICELENS_ALT_CCY")
            .map(|v| v.trim().to_uppercase())
            .filter(|v| !v.is_empty());

        let endpoint = get("PRICELENS_ENDPOINT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.endpoint);

        Self {
            endpoint,
            default_currency,
            max_pages,
            http_timeout,
            retries,
            backoff_base,
            alt_currency,
        }
    }
}

/// Clamp a page bound into the supported range.
pub fn clamp_pages(value: i64) -> u32 {
    value.clamp(MIN_PAGES, MAX_PAGES) as u32
}

/// Clamp a search result limit into the supported range.
pub fn clamp_limit(value: i64) -> usize {
    value.clamp(1, MAX_SEARCH_LIMIT) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_pages_bounds() {
        assert_eq!(clamp_pages(0), 1);
        assert_eq!(clamp_pages(-5), 1);
        assert_eq!(clamp_pages(1), 1);
        assert_eq!(clamp_pages(6), 6);
        assert_eq!(clamp_pages(10), 10);
        assert_eq!(clamp_pages(99), 10);
    }

    #[test]
    fn clamp_limit_bounds() {
        assert_eq!(clamp_limit(0), 1);
        assert_eq!(clamp_limit(12), 12);
        assert_eq!(clamp_limit(20), 20);
        assert_eq!(clamp_limit(500), 20);
    }

    #[test]
    fn defaults_without_env() {
        let config = PricingConfig::from_lookup(|_| None);
        assert_eq!(config.default_currency, "USD");
        assert_eq!(config.max_pages, 6);
        assert_eq!(config.http_timeout, Duration::from_secs(25));
        assert_eq!(config.retries, 2);
        assert_eq!(config.backoff_base, Duration::from_millis(500));
        assert!(config.alt_currency.is_none());
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn env_overrides_are_applied() {
        let config = PricingConfig::from_lookup(|key| match key {
            "PRICELENS_DEFAULT_CCY" => Some(" jpy ".to_string()),
            "PRICELENS_MAX_PAGES" => Some("3".to_string()),
            "PRICELENS_HTTP_TIMEOUT" => Some("10".to_string()),
            "PRICELENS_RETRIES" => Some("4".to_string()),
            "PRICELENS_BACKOFF" => Some("0.1".to_string()),
            "PRICELENS_ALT_CCY" => Some("usd".to_string()),
            "PRICELENS_ENDPOINT" => Some("http://localhost:9000/products/".to_string()),
            _ => None,
        });
        assert_eq!(config.default_currency, "JPY");
        assert_eq!(config.max_pages, 3);
        assert_eq!(config.http_timeout, Duration::from_secs(10));
        assert_eq!(config.retries, 4);
        assert_eq!(config.backoff_base, Duration::from_millis(100));
        assert_eq!(config.alt_currency.as_deref(), Some("USD"));
        assert_eq!(config.endpoint, "http://localhost:9000/products/");
    }

    #[test]
    fn malformed_env_values_fall_back_to_defaults() {
        let config = PricingConfig::from_lookup(|key| match key {
            "PRICELENS_MAX_PAGES" => Some("lots".to_string()),
            "PRICELENS_HTTP_TIMEOUT" => Some("-1".to_string()),
            "PRICELENS_ALT_CCY" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(config.http_timeout, Duration::from_secs(25));
        assert!(config.alt_currency.is_none());
    }

    #[test]
    fn env_page_bound_is_clamped() {
        let config = PricingConfig::from_lookup(|key| match key {
            "PRICELENS_MAX_PAGES" => Some("50".to_string()),
            _ => None,
        });
        assert_eq!(config.max_pages, 10);
    }
}
