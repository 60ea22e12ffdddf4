use unicode_normalization::UnicodeNormalization;

/// Normalize text for matching: NFKC, lowercase, punctuation mapped to
/// spaces, whitespace collapsed.
///
/// Queries and catalog fields go through the same function so matching is
/// symmetric. Pure and total; normalizing twice yields the same output.
pub fn normalize(text: &str) -> String {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    let despeckled: String = folded
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();
    despeckled.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove spaces for space-insensitive comparisons.
pub fn strip_spaces(text: &str) -> String {
    text.split_whitespace().collect()
}

/// Build an acronym from the leading letters of each word, e.g.
/// "virtual cloud network" -> "vcn". Used only as a weak match hint.
pub fn acronym(text: &str) -> String {
    normalize(text)
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_collapses_whitespace() {
        assert_eq!(normalize("  Object   Storage  "), "object storage");
    }

    #[test]
    fn punctuation_becomes_spaces() {
        assert_eq!(normalize("Load-Balancer (Flexible)"), "load balancer flexible");
        assert_eq!(normalize("block.volume/perf"), "block volume perf");
    }

    #[test]
    fn underscores_survive() {
        assert_eq!(normalize("UNKNOWN_SKU"), "unknown_sku");
    }

    #[test]
    fn compatibility_forms_are_folded() {
        // Full-width latin and the unicode ligature both collapse to ascii.
        assert_eq!(normalize("ＤＡＴＡＢＡＳＥ"), "database");
        assert_eq!(normalize("ﬁle storage"), "file storage");
    }

    #[test]
    fn equal_up_to_case_and_punctuation_normalizes_identically() {
        assert_eq!(normalize("Autonomous Database!"), normalize("autonomous,database"));
    }

    #[test]
    fn idempotent_under_renormalization() {
        let once = normalize("Compute – Standard.E4 (OCPU)");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn strip_spaces_removes_all_whitespace() {
        assert_eq!(strip_spaces("autonomous database"), "autonomousdatabase");
        assert_eq!(strip_spaces("  a  b\tc "), "abc");
    }

    #[test]
    fn acronym_takes_leading_letters() {
        assert_eq!(acronym("Virtual Cloud Network"), "vcn");
        assert_eq!(acronym("autonomous database"), "ad");
        assert_eq!(acronym(""), "");
    }
}
