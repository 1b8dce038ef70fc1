pub mod buckets;
pub mod match_quality;
pub mod scoring;
pub mod suggestions;

use serde::Serialize;
use strum::{AsRefStr, Display};

pub use match_quality::{MatchQualityScorer, calculate_match_quality_score};
pub use scoring::{PROFILE_WEIGHTS, ProfileScorer, ProfileWeights, calculate_profile_score};
pub use suggestions::{DEFAULT_SUGGESTION_DISPLAY_LIMIT, Suggestion};

/// Named bucket for a profile completeness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, AsRefStr, Display)]
pub enum QualityTier {
    Incomplete,
    Basic,
    Fair,
    Good,
    #[serde(rename = "Very Good")]
    #[strum(to_string = "Very Good")]
    VeryGood,
    Excellent,
}

/// Per-section completeness, each 0〜100. Display only; the total score is
/// computed from section points, not from these percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileBreakdown {
    pub basic_info: u8,
    pub skills: u8,
    pub interests: u8,
    pub bio: u8,
    pub experience: u8,
    pub profile_pic: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileScoreResult {
    pub score: u8,
    pub quality_tier: QualityTier,
    pub breakdown: ProfileBreakdown,
    pub suggestions: Vec<String>,
}

impl ProfileScoreResult {
    /// Result for a missing profile: zero score, nothing to suggest.
    pub fn empty() -> Self {
        Self {
            score: 0,
            quality_tier: QualityTier::Incomplete,
            breakdown: ProfileBreakdown::default(),
            suggestions: Vec::new(),
        }
    }

    /// The first `limit` suggestions, the way the profile page shows them.
    pub fn top_suggestions(&self, limit: usize) -> &[String] {
        &self.suggestions[..self.suggestions.len().min(limit)]
    }
}
