use super::{
    skills::check_keyword_overlap,
    weights::{MATCH_WEIGHTS, MatchWeights},
};
use crate::{JobPosting, UserProfile, normalize::non_empty};

/// Score returned when no section contributes to the maximum.
pub const NEUTRAL_MATCH_SCORE: u8 = 50;

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringResult {
    pub score: f64,
    pub max_score: f64,
    pub status: &'static str,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchBreakdown {
    /// Final 0〜100 score.
    pub total: u8,
    pub skills: ScoringResult,
    pub interests: ScoringResult,
    pub job_type: ScoringResult,
    pub location: ScoringResult,
    pub experience: ScoringResult,
}

impl MatchBreakdown {
    pub fn raw_score(&self) -> f64 {
        self.sections().iter().map(|s| s.score).sum()
    }

    pub fn raw_max_score(&self) -> f64 {
        self.sections().iter().map(|s| s.max_score).sum()
    }

    fn sections(&self) -> [&ScoringResult; 5] {
        [
            &self.skills,
            &self.interests,
            &self.job_type,
            &self.location,
            &self.experience,
        ]
    }
}

/// Job ↔ profile compatibility score (0〜100).
pub fn calculate_match_score(job: &JobPosting, profile: &UserProfile) -> u8 {
    MatchScorer::default().calculate_match_score(job, profile)
}

/// Same as [`calculate_match_score`] with the per-section points kept.
pub fn calculate_match_breakdown(job: &JobPosting, profile: &UserProfile) -> MatchBreakdown {
    MatchScorer::default().calculate_breakdown(job, profile)
}

#[derive(Debug, Clone)]
pub struct MatchScorer {
    weights: MatchWeights,
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(MATCH_WEIGHTS)
    }
}

impl MatchScorer {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn calculate_match_score(&self, job: &JobPosting, profile: &UserProfile) -> u8 {
        self.calculate_breakdown(job, profile).total
    }

    pub fn calculate_breakdown(&self, job: &JobPosting, profile: &UserProfile) -> MatchBreakdown {
        let skills = self.score_skills(job, profile);
        let interests = self.score_interests(job, profile);
        let job_type = self.score_job_type(job, profile);
        let location = self.score_location(job, profile);
        let experience = self.score_experience(job, profile);

        // Accumulate in section order; rounding happens once on the final percentage.
        let mut score = 0.0;
        let mut max_score = 0.0;
        for section in [&skills, &interests, &job_type, &location, &experience] {
            score += section.score;
            max_score += section.max_score;
        }

        MatchBreakdown {
            total: to_percentage(score, max_score),
            skills,
            interests,
            job_type,
            location,
            experience,
        }
    }

    fn score_skills(&self, job: &JobPosting, profile: &UserProfile) -> ScoringResult {
        let weight = self.weights.skills;
        let overlap = check_keyword_overlap(&job.required_skills, &profile.skills);

        let Some(fraction) = overlap.match_fraction() else {
            return ScoringResult {
                score: weight / 2.0,
                max_score: weight,
                status: "UNKNOWN",
                details: "no required skills listed; half credit".into(),
            };
        };

        ScoringResult {
            score: fraction * weight,
            max_score: weight,
            status: status_from_fraction(fraction),
            details: overlap.reason("skills"),
        }
    }

    fn score_interests(&self, job: &JobPosting, profile: &UserProfile) -> ScoringResult {
        let weight = self.weights.interests;
        let overlap = check_keyword_overlap(&job.tags, &profile.interests);

        let Some(fraction) = overlap.match_fraction() else {
            return ScoringResult {
                score: 0.0,
                max_score: weight,
                status: "UNKNOWN",
                details: "job has no tags".into(),
            };
        };

        ScoringResult {
            score: fraction * weight,
            max_score: weight,
            status: status_from_fraction(fraction),
            details: overlap.reason("tags"),
        }
    }

    fn score_job_type(&self, job: &JobPosting, profile: &UserProfile) -> ScoringResult {
        let weight = self.weights.job_type;
        let preferred = job
            .job_type
            .is_some_and(|job_type| profile.preferred_job_types.contains(&job_type));

        if preferred {
            ScoringResult {
                score: weight,
                max_score: weight,
                status: "PERFECT_MATCH",
                details: format!("preferred job type: {}", display_or_unset(job.job_type)),
            }
        } else {
            ScoringResult {
                score: 0.0,
                max_score: weight,
                status: "MISS",
                details: format!("not a preferred job type: {}", display_or_unset(job.job_type)),
            }
        }
    }

    fn score_location(&self, job: &JobPosting, profile: &UserProfile) -> ScoringResult {
        let weight = self.weights.location;

        match (non_empty(&job.location), non_empty(&profile.location)) {
            (Some(job_location), Some(profile_location)) if job_location == profile_location => {
                ScoringResult {
                    score: weight,
                    max_score: weight,
                    status: "PERFECT_MATCH",
                    details: format!("same location: {job_location}"),
                }
            }
            (Some(job_location), _) => ScoringResult {
                score: weight / 2.0,
                max_score: weight,
                status: "PARTIAL_MATCH",
                details: format!("location differs or unset: job={job_location}"),
            },
            (None, _) => ScoringResult {
                score: weight / 2.0,
                max_score: weight,
                status: "UNKNOWN",
                details: "job has no location; half credit".into(),
            },
        }
    }

    fn score_experience(&self, job: &JobPosting, profile: &UserProfile) -> ScoringResult {
        let weight = self.weights.experience;

        let (Some(required), Some(actual)) = (job.experience_level, profile.experience_level)
        else {
            return ScoringResult {
                score: weight / 2.0,
                max_score: weight,
                status: "UNKNOWN",
                details: "experience level unset on job or profile; half credit".into(),
            };
        };

        let (score, status) = match required.distance(actual) {
            0 => (weight, "PERFECT_MATCH"),
            1 => (weight / 2.0, "PARTIAL_MATCH"),
            _ => (0.0, "MISS"),
        };

        ScoringResult {
            score,
            max_score: weight,
            status,
            details: format!("job={required} / profile={actual}"),
        }
    }
}

/// `round(score / max * 100)` clamped to 0〜100, or the neutral score when `max` is 0.
pub(crate) fn to_percentage(score: f64, max_score: f64) -> u8 {
    if max_score <= 0.0 {
        return NEUTRAL_MATCH_SCORE;
    }
    ((score / max_score) * 100.0).round().clamp(0.0, 100.0) as u8
}

fn status_from_fraction(fraction: f64) -> &'static str {
    if fraction >= 1.0 {
        "PERFECT_MATCH"
    } else if fraction >= 0.5 {
        "MATCH"
    } else if fraction > 0.0 {
        "PARTIAL_MATCH"
    } else {
        "MISS"
    }
}

fn display_or_unset(job_type: Option<crate::taxonomy::JobType>) -> String {
    job_type.map_or_else(|| "unset".to_string(), |t| t.to_string())
}
