use serde::Deserialize;

use crate::modules::pricing::domain::entities::CatalogItem;

/// One page of the paginated products listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub items: Vec<CatalogItem>,
    #[serde(default)]
    pub links: Vec<PageLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageLink {
    pub rel: Option<String>,
    pub href: Option<String>,
}

impl CatalogPage {
    /// The href of the `rel == "next"` link, if any non-empty one exists.
    pub fn next_link(&self) -> Option<&str> {
        self.links
            .iter()
            .filter(|link| link.rel.as_deref() == Some("next"))
            .find_map(|link| link.href.as_deref().filter(|href| !href.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn next_link_is_found_among_other_rels() {
        let page: CatalogPage = serde_json::from_value(json!({
            "items": [],
            "links": [
                {"rel": "self", "href": "/products/"},
                {"rel": "next", "href": "/products/?page=2"}
            ]
        }))
        .unwrap();
        assert_eq!(page.next_link(), Some("/products/?page=2"));
    }

    #[test]
    fn empty_or_missing_next_href_counts_as_no_next() {
        let page: CatalogPage = serde_json::from_value(json!({
            "links": [{"rel": "next", "href": ""}, {"rel": "next"}]
        }))
        .unwrap();
        assert_eq!(page.next_link(), None);
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let page: CatalogPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.next_link(), None);
    }
}
