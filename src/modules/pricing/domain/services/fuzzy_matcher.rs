use regex::Regex;
use strsim::normalized_levenshtein;

use crate::modules::pricing::domain::entities::CatalogItem;
use crate::modules::pricing::domain::services::text_normalizer::{normalize, strip_spaces};
use crate::modules::pricing::domain::value_objects::QueryVariants;

/// Minimum similarity ratio for a long variant to count as a fuzzy hit.
pub const SIMILARITY_THRESHOLD: f64 = 0.90;

/// Compiled matching state for one query.
///
/// Short variants (3-4 chars, e.g. "ADB") are prone to false substring hits
/// and must match on a word boundary; long variants tolerate space-stripped
/// substring matches and near-miss spellings via similarity ratio.
pub struct ProductMatcher {
    short_patterns: Vec<Regex>,
    long_variants: Vec<String>,
    adb_guard: Option<(Regex, Regex)>,
}

impl ProductMatcher {
    pub fn new(query: &str) -> Self {
        let variants = QueryVariants::build(query);

        let short_patterns = variants
            .short()
            .map(|v| Regex::new(&format!(r"\b{}\b", regex::escape(v))).unwrap())
            .collect();
        let long_variants = variants.long().map(str::to_string).collect();

        let adb_guard = variants.adb_intent().then(|| {
            (
                Regex::new(r"\bautonomous\b").unwrap(),
                Regex::new(r"\bdatabase\b").unwrap(),
            )
        });

        Self {
            short_patterns,
            long_variants,
            adb_guard,
        }
    }

    /// Whether the item's combined text matches any query variant.
    pub fn matches(&self, item: &CatalogItem) -> bool {
        let text = normalize(&item.combined_text());
        let text_stripped = strip_spaces(&text);

        // Autonomous-Database intent requires both keywords as whole words.
        if let Some((autonomous, database)) = &self.adb_guard {
            if !(autonomous.is_match(&text) && database.is_match(&text)) {
                return false;
            }
        }

        self.short_patterns.iter().any(|re| re.is_match(&text))
            || self
                .long_variants
                .iter()
                .any(|v| text_stripped.contains(v.as_str()))
            || self
                .long_variants
                .iter()
                .any(|v| normalized_levenshtein(v, &text_stripped) >= SIMILARITY_THRESHOLD)
    }
}
