use std::collections::BTreeSet;

use super::text_normalizer::{normalize, strip_spaces};

/// Short-form to long-form product aliases. A minimal seed rather than a
/// maintained dictionary; static domain data shared read-only by all calls.
pub const ALIASES: &[(&str, &str)] = &[
    ("adb", "autonomous database"),
    ("oss", "object storage"),
    ("lb", "load balancer"),
    ("oke", "kubernetes engine"),
    ("oac", "analytics cloud"),
    ("genai", "generative ai"),
    ("oci", "oracle cloud infrastructure"),
    ("db", "database"),
    ("vm", "virtual machine"),
    ("vmware", "vmware cloud"),
    ("bms", "bare metal server"),
    ("bmc", "bare metal cloud"),
    ("block", "block storage"),
    ("file", "file storage"),
    ("archive", "archive storage"),
    ("object", "object storage"),
    ("network", "virtual cloud network"),
    ("loadbalancer", "load balancer"),
    ("dns", "domain name system"),
    ("dns zone", "dns zone management"),
];

/// Expand a normalized query into alias variants.
///
/// An alias pair contributes only when the query exactly equals the short
/// form, exactly equals the long form, or contains the long form as a
/// substring; both forms plus their space-stripped shapes are added.
pub fn expand_aliases(query_norm: &str, variants: &mut BTreeSet<String>) {
    for (short, long) in ALIASES {
        let short_norm = normalize(short);
        let long_norm = normalize(long);
        if query_norm == short_norm || query_norm == long_norm || query_norm.contains(&long_norm) {
            variants.insert(strip_spaces(&short_norm));
            variants.insert(short_norm);
            variants.insert(strip_spaces(&long_norm));
            variants.insert(long_norm);
        }
    }
}

/// Whether a normalized query means "Autonomous Database" specifically.
///
/// Such queries are held to a stricter rule: a candidate must contain both
/// the whole words "autonomous" and "database", so that "ADB" cannot match
/// unrelated database or autonomous-prefixed services.
pub fn is_adb_intent(query_norm: &str) -> bool {
    matches!(query_norm, "adb" | "autonomous db" | "autonomousdb")
}
