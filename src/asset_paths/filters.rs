use regex::Regex;

fn skipped_reference_patterns() -> &'static [Regex] {
    use std::sync::OnceLock;

    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            vec![
                Regex::new(r"(?i)^https?://").expect("invalid http(s) regex"),
                Regex::new(r"(?i)^data:").expect("invalid data URI regex"),
            ]
        })
        .as_slice()
}

/// Determine whether a reference must be left as written.
///
/// External URLs need a network connection to resolve, and data URIs are already inlined,
/// which is what makes running the inliner over its own output a no-op.
pub fn should_skip_reference(value: &str) -> bool {
    skipped_reference_patterns()
        .iter()
        .any(|pattern| pattern.is_match(value))
}

/// Whether the reference is an embedded `data:` URI.
pub fn is_data_uri(value: &str) -> bool {
    value
        .get(..5)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("data:"))
}
