use serde::Deserialize;

/// Arguments for a direct SKU lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct GetSkuRequest {
    pub part_number: String,
    pub currency: Option<String>,
    pub max_pages: Option<i64>,
}

impl GetSkuRequest {
    pub fn new(part_number: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            currency: None,
            max_pages: None,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_max_pages(mut self, max_pages: i64) -> Self {
        self.max_pages = Some(max_pages);
        self
    }
}

/// Arguments for a fuzzy name search.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchNameRequest {
    pub query: String,
    pub currency: Option<String>,
    pub limit: Option<i64>,
    pub max_pages: Option<i64>,
    #[serde(default)]
    pub require_priced: bool,
}

impl SearchNameRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            currency: None,
            limit: None,
            max_pages: None,
            require_priced: false,
        }
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_require_priced(mut self, require_priced: bool) -> Self {
        self.require_priced = require_priced;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_sku_request_deserializes_with_optional_fields() {
        let request: GetSkuRequest =
            serde_json::from_value(json!({"part_number": "B88298"})).unwrap();
        assert_eq!(request.part_number, "B88298");
        assert!(request.currency.is_none());
        assert!(request.max_pages.is_none());
    }

    #[test]
    fn search_request_defaults_require_priced_to_false() {
        let request: SearchNameRequest =
            serde_json::from_value(json!({"query": "object storage", "limit": 5})).unwrap();
        assert_eq!(request.limit, Some(5));
        assert!(!request.require_priced);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(serde_json::from_value::<SearchNameRequest>(json!({"limit": 5})).is_err());
    }
}
