use crate::skill_normalizer::{contains_either, normalize_keyword, normalize_keyword_list};

#[derive(Debug, Clone, PartialEq)]
pub struct KeywordMatchResult {
    /// Required keywords (original spelling) covered by at least one possessed keyword.
    pub matched: Vec<String>,
    /// Required keywords nobody covers.
    pub missing: Vec<String>,
}

impl KeywordMatchResult {
    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }

    /// Fraction of required keywords matched; `None` when nothing was required.
    pub fn match_fraction(&self) -> Option<f64> {
        match self.total() {
            0 => None,
            total => Some(self.matched.len() as f64 / total as f64),
        }
    }

    pub fn reason(&self, label: &str) -> String {
        format!(
            "{label}: {}/{} matched (matched: {} / missing: {})",
            self.matched.len(),
            self.total(),
            join_or_none(&self.matched),
            join_or_none(&self.missing),
        )
    }
}

/// Checks each required keyword against the possessed ones with fuzzy containment.
///
/// Every entry of `required` counts once, duplicates included, so the fraction
/// is always relative to the list as posted.
pub fn check_keyword_overlap(required: &[String], possessed: &[String]) -> KeywordMatchResult {
    let possessed = normalize_keyword_list(possessed);
    let (matched, missing): (Vec<String>, Vec<String>) =
        required.iter().cloned().partition(|keyword| {
            let keyword = normalize_keyword(keyword);
            possessed.iter().any(|owned| contains_either(owned, &keyword))
        });

    KeywordMatchResult { matched, missing }
}

fn join_or_none(keywords: &[String]) -> String {
    if keywords.is_empty() {
        "none".to_string()
    } else {
        keywords.join(", ")
    }
}
