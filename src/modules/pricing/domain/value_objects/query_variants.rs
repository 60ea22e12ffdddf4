use std::collections::BTreeSet;

use crate::modules::pricing::domain::services::alias_expander::{expand_aliases, is_adb_intent};
use crate::modules::pricing::domain::services::text_normalizer::{
    acronym, normalize, strip_spaces,
};

/// Shortest variant length considered at all; anything shorter is too prone
/// to accidental matches.
const MIN_VARIANT_LEN: usize = 3;
/// Variants up to this length must match on a word boundary.
const MAX_SHORT_LEN: usize = 4;

/// The matchable shapes derived from one query string: its normalized form,
/// space-stripped form, acronym, and alias expansions.
///
/// Immutable once built. Variants shorter than three characters are dropped,
/// which means a too-short query can still match through its expanded alias
/// forms but never through the raw fragment itself.
#[derive(Debug, Clone)]
pub struct QueryVariants {
    variants: BTreeSet<String>,
    adb_intent: bool,
}

impl QueryVariants {
    pub fn build(query: &str) -> Self {
        let query_norm = normalize(query);

        let mut variants = BTreeSet::new();
        variants.insert(query_norm.clone());
        variants.insert(strip_spaces(&query_norm));
        variants.insert(acronym(&query_norm));
        expand_aliases(&query_norm, &mut variants);

        variants.retain(|v| v.chars().count() >= MIN_VARIANT_LEN);

        Self {
            adb_intent: is_adb_intent(&query_norm),
            variants,
        }
    }

    /// Variants of length 3-4; these only count as whole-word hits.
    pub fn short(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .filter(|v| v.chars().count() <= MAX_SHORT_LEN)
            .map(String::as_str)
    }

    /// Variants of length >= 5; these tolerate substring and fuzzy matches.
    pub fn long(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .filter(|v| v.chars().count() > MAX_SHORT_LEN)
            .map(String::as_str)
    }

    pub fn adb_intent(&self) -> bool {
        self.adb_intent
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}
