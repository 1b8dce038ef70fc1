use std::cmp::Ordering;

use serde::Serialize;
use tracing::debug;

use super::{behavior::BehaviorSignal, scoring::MatchScorer};
use crate::{JobPosting, UserProfile, config::RankingConfig, date::ranking_timestamp_millis};

/// Upper bound of the boosted score.
pub const MAX_MATCH_SCORE: u8 = 100;

/// A job annotated with its ranking scores.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredJob {
    #[serde(flatten)]
    pub job: JobPosting,
    /// `min(base_score + behavior_boost, 100)`
    pub match_score: u8,
    pub base_score: u8,
    pub behavior_boost: u8,
}

#[derive(Debug, Clone, Default)]
pub struct JobRanker {
    scorer: MatchScorer,
    config: RankingConfig,
}

impl JobRanker {
    pub fn new(config: RankingConfig) -> Self {
        Self {
            scorer: MatchScorer::default(),
            config,
        }
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Scores every job, adds the behaviour boost and sorts best first.
    ///
    /// Order: `match_score` descending, then `created_at` descending with
    /// missing timestamps treated as the epoch. Jobs equal on both keys keep
    /// their input order. The input slice is left untouched.
    pub fn rank(
        &self,
        jobs: &[JobPosting],
        profile: &UserProfile,
        behavior: &BehaviorSignal,
    ) -> Vec<ScoredJob> {
        let behavior_boost = self.config.boost.boost_for(behavior);

        let mut ranked: Vec<ScoredJob> = jobs
            .iter()
            .map(|job| self.build_scored_job(job, profile, behavior_boost))
            .collect();

        ranked.sort_by(compare_ranked);

        debug!(
            jobs = ranked.len(),
            behavior_boost,
            top_score = ranked.first().map(|j| j.match_score),
            "ranked jobs"
        );

        ranked
    }

    /// The first `limit` entries of [`JobRanker::rank`].
    pub fn recommend(
        &self,
        jobs: &[JobPosting],
        profile: &UserProfile,
        behavior: &BehaviorSignal,
        limit: usize,
    ) -> Vec<ScoredJob> {
        let mut ranked = self.rank(jobs, profile, behavior);
        ranked.truncate(limit);
        ranked
    }

    fn build_scored_job(&self, job: &JobPosting, profile: &UserProfile, boost: u8) -> ScoredJob {
        let base_score = self.scorer.calculate_match_score(job, profile);

        ScoredJob {
            job: job.clone(),
            match_score: apply_boost(base_score, boost),
            base_score,
            behavior_boost: boost,
        }
    }
}

/// Ranks with the default weights and boost points.
pub fn rank_jobs(
    jobs: &[JobPosting],
    profile: &UserProfile,
    behavior: &BehaviorSignal,
) -> Vec<ScoredJob> {
    JobRanker::default().rank(jobs, profile, behavior)
}

/// Dashboard recommendations: the top `limit` ranked jobs.
pub fn recommend_jobs(
    jobs: &[JobPosting],
    profile: &UserProfile,
    behavior: &BehaviorSignal,
    limit: usize,
) -> Vec<ScoredJob> {
    JobRanker::default().recommend(jobs, profile, behavior, limit)
}

fn apply_boost(base_score: u8, boost: u8) -> u8 {
    base_score.saturating_add(boost).min(MAX_MATCH_SCORE)
}

fn compare_ranked(a: &ScoredJob, b: &ScoredJob) -> Ordering {
    b.match_score.cmp(&a.match_score).then_with(|| {
        ranking_timestamp_millis(b.job.created_at.as_ref())
            .cmp(&ranking_timestamp_millis(a.job.created_at.as_ref()))
    })
}
