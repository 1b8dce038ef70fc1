//! Profile-side match quality: a stricter companion to the recommendation score.
//!
//! Unlike [`crate::matching::scoring`], a section only counts toward the
//! maximum when both sides carry the data, missing data earns no partial
//! credit, and location is all-or-nothing.

use crate::{
    JobPosting, UserProfile,
    matching::{
        skills::check_keyword_overlap,
        weights::{QUALITY_WEIGHTS, QualityWeights},
    },
    normalize::non_empty,
};

/// Match quality (0〜100); 0 when either side is missing or no section applies.
pub fn calculate_match_quality_score(
    profile: Option<&UserProfile>,
    job: Option<&JobPosting>,
) -> u8 {
    match (profile, job) {
        (Some(profile), Some(job)) => MatchQualityScorer::default().score(profile, job),
        _ => 0,
    }
}

#[derive(Debug, Clone)]
pub struct MatchQualityScorer {
    weights: QualityWeights,
}

impl Default for MatchQualityScorer {
    fn default() -> Self {
        Self::new(QUALITY_WEIGHTS)
    }
}

impl MatchQualityScorer {
    pub fn new(weights: QualityWeights) -> Self {
        Self { weights }
    }

    pub fn score(&self, profile: &UserProfile, job: &JobPosting) -> u8 {
        let mut points = 0.0;
        let mut max_points = 0.0;

        if let Some(fraction) =
            check_keyword_overlap(&job.required_skills, &profile.skills).match_fraction()
        {
            max_points += self.weights.skills;
            points += fraction * self.weights.skills;
        }

        if let (Some(required), Some(actual)) = (job.experience_level, profile.experience_level) {
            max_points += self.weights.experience;
            points += match required.distance(actual) {
                0 => self.weights.experience,
                1 => self.weights.experience / 2.0,
                _ => 0.0,
            };
        }

        if let Some(fraction) = check_keyword_overlap(&job.tags, &profile.interests).match_fraction()
        {
            max_points += self.weights.tags;
            points += fraction * self.weights.tags;
        }

        if let (Some(job_location), Some(profile_location)) =
            (non_empty(&job.location), non_empty(&profile.location))
        {
            max_points += self.weights.location;
            if job_location.to_lowercase() == profile_location.to_lowercase() {
                points += self.weights.location;
            }
        }

        if max_points > 0.0 {
            ((points / max_points) * 100.0).round().clamp(0.0, 100.0) as u8
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ExperienceLevel;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn job() -> JobPosting {
        JobPosting {
            required_skills: strings(&["React", "Node.js"]),
            tags: strings(&["remote"]),
            location: Some("Campus A".into()),
            experience_level: Some(ExperienceLevel::Intermediate),
            ..JobPosting::default()
        }
    }

    fn profile() -> UserProfile {
        UserProfile {
            skills: strings(&["react", "express"]),
            location: Some("campus a".into()),
            experience_level: Some(ExperienceLevel::Advanced),
            ..UserProfile::default()
        }
    }

    #[test]
    fn missing_inputs_score_zero() {
        assert_eq!(calculate_match_quality_score(None, Some(&job())), 0);
        assert_eq!(calculate_match_quality_score(Some(&profile()), None), 0);
    }

    #[test]
    fn no_applicable_section_scores_zero() {
        let score = calculate_match_quality_score(
            Some(&UserProfile::default()),
            Some(&JobPosting::default()),
        );
        assert_eq!(score, 0);
    }

    #[test]
    fn weighs_only_sections_both_sides_fill() {
        // skills 20/40, experience 10/20 (adjacent), tags 0/20, location 20/20 → 50/100
        assert_eq!(
            calculate_match_quality_score(Some(&profile()), Some(&job())),
            50
        );
    }

    #[test]
    fn location_is_all_or_nothing() {
        let mut profile = profile();
        profile.location = Some("Campus B".into());
        // 20 + 10 + 0 + 0 over 100
        assert_eq!(MatchQualityScorer::default().score(&profile, &job()), 30);

        profile.location = None;
        // location no longer counts: 30 / 80
        assert_eq!(MatchQualityScorer::default().score(&profile, &job()), 38);
    }

    #[test]
    fn skills_only_job_uses_skill_fraction() {
        let job = JobPosting {
            required_skills: strings(&["Python", "SQL", "Statistics", "Pandas"]),
            ..JobPosting::default()
        };
        let profile = UserProfile {
            skills: strings(&["python", "pandas", "sql"]),
            ..UserProfile::default()
        };
        assert_eq!(MatchQualityScorer::default().score(&profile, &job), 75);
    }

    #[test]
    fn differs_from_recommendation_score() {
        let recommendation = crate::matching::calculate_match_score(&job(), &profile());
        let quality = MatchQualityScorer::default().score(&profile(), &job());
        assert_ne!(recommendation, quality);
    }
}
