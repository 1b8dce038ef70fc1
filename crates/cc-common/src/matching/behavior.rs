use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::normalize::null_as_default;

/// Snapshot of a seeker's past interactions, as job ids.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BehaviorSignal {
    #[serde(default, alias = "appliedJobs", deserialize_with = "null_as_default")]
    pub applied_job_ids: HashSet<String>,
    #[serde(default, alias = "viewedJobs", deserialize_with = "null_as_default")]
    pub viewed_job_ids: HashSet<String>,
    #[serde(default, alias = "bookmarkedJobs", deserialize_with = "null_as_default")]
    pub bookmarked_job_ids: HashSet<String>,
}

impl BehaviorSignal {
    pub fn is_empty(&self) -> bool {
        self.applied_job_ids.is_empty()
            && self.viewed_job_ids.is_empty()
            && self.bookmarked_job_ids.is_empty()
    }
}

/// Points added on top of the match score for an engaged seeker.
///
/// The boost only looks at how much history exists, never at which jobs it
/// touches, so every job in one ranking call receives the same boost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoostConfig {
    /// Awarded when at least one application exists.
    pub applied_points: u8,
    /// Awarded when more than `viewed_threshold` jobs were viewed.
    pub viewed_points: u8,
    pub viewed_threshold: usize,
    /// Awarded when at least one bookmark exists.
    pub bookmarked_points: u8,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            applied_points: 5,
            viewed_points: 3,
            viewed_threshold: 3,
            bookmarked_points: 2,
        }
    }
}

impl BoostConfig {
    pub fn max_boost(&self) -> u8 {
        self.applied_points
            .saturating_add(self.viewed_points)
            .saturating_add(self.bookmarked_points)
    }

    pub fn boost_for(&self, behavior: &BehaviorSignal) -> u8 {
        let mut boost: u8 = 0;
        if !behavior.applied_job_ids.is_empty() {
            boost = boost.saturating_add(self.applied_points);
        }
        if behavior.viewed_job_ids.len() > self.viewed_threshold {
            boost = boost.saturating_add(self.viewed_points);
        }
        if !behavior.bookmarked_job_ids.is_empty() {
            boost = boost.saturating_add(self.bookmarked_points);
        }
        boost
    }
}
