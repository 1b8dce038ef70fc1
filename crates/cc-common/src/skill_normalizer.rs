//! Keyword comparison shared by every scorer that looks at skills or tags.
//!
//! Matching is deliberately loose: two keywords match when either one,
//! lowercased, is a substring of the other. "React" therefore matches
//! "react native" and "ReactJS", and "C" matches anything containing a `c`.
//! There is no alias table, tokenization or edit distance.

/// Lowercased form used for comparison.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.to_lowercase()
}

/// Lowercases every keyword, keeping order and duplicates.
pub fn normalize_keyword_list(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|k| normalize_keyword(k)).collect()
}

/// `fuzzy_contains(a, b)` is true iff `lowercase(a)` is a substring of
/// `lowercase(b)` or `lowercase(b)` is a substring of `lowercase(a)`.
///
/// An empty keyword is a substring of everything and so matches any keyword.
pub fn fuzzy_contains(a: &str, b: &str) -> bool {
    contains_either(&normalize_keyword(a), &normalize_keyword(b))
}

/// Same check for keywords that are already lowercased.
pub(crate) fn contains_either(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
