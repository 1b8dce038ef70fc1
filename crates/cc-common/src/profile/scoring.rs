use tracing::debug;

use super::{
    ProfileBreakdown, ProfileScoreResult,
    buckets::{
        BIO_BUCKETS, INFERRED_EXPERIENCE_BUCKETS, INTEREST_BUCKETS, SKILL_BUCKETS, full_credit_at,
        points_for, tier_for,
    },
    suggestions::improvement_suggestions,
};
use crate::{
    UserProfile,
    normalize::{non_blank, non_empty, trimmed_text_len},
};

/// Section maxima. They sum to 100, so the total points are already a percentage.
pub const PROFILE_WEIGHTS: ProfileWeights = ProfileWeights {
    basic_info: 20,
    skills: 25,
    interests: 15,
    bio: 15,
    experience: 15,
    profile_pic: 10,
};

/// Points per basic-info field (display name, email, location, role).
const BASIC_INFO_FIELD_POINTS: u8 = 5;

/// Ceiling of the experience breakdown when the level is only inferred.
const INFERRED_EXPERIENCE_BREAKDOWN_CAP: f64 = 67.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileWeights {
    pub basic_info: u8,
    pub skills: u8,
    pub interests: u8,
    pub bio: u8,
    pub experience: u8,
    pub profile_pic: u8,
}

impl ProfileWeights {
    pub fn sum(&self) -> u32 {
        [
            self.basic_info,
            self.skills,
            self.interests,
            self.bio,
            self.experience,
            self.profile_pic,
        ]
        .iter()
        .map(|&w| u32::from(w))
        .sum()
    }
}

/// Profile completeness score; a missing profile yields [`ProfileScoreResult::empty`].
pub fn calculate_profile_score(profile: Option<&UserProfile>) -> ProfileScoreResult {
    profile.map_or_else(ProfileScoreResult::empty, |p| ProfileScorer.score(p))
}

/// Points earned by each section of one profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionPoints {
    pub basic_info: u8,
    pub skills: u8,
    pub interests: u8,
    pub bio: u8,
    pub experience: u8,
    pub profile_pic: u8,
}

impl SectionPoints {
    pub fn total(&self) -> u32 {
        [
            self.basic_info,
            self.skills,
            self.interests,
            self.bio,
            self.experience,
            self.profile_pic,
        ]
        .iter()
        .map(|&p| u32::from(p))
        .sum()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileScorer;

impl ProfileScorer {
    pub fn score(&self, profile: &UserProfile) -> ProfileScoreResult {
        let points = self.section_points(profile);
        let score = percentage(points.total(), PROFILE_WEIGHTS.sum());
        let quality_tier = tier_for(score);
        let suggestions = improvement_suggestions(profile, score)
            .into_iter()
            .map(|s| s.message().to_string())
            .collect();

        debug!(
            uid = profile.uid.as_deref().unwrap_or("unknown"),
            score,
            tier = %quality_tier,
            "profile scored"
        );

        ProfileScoreResult {
            score,
            quality_tier,
            breakdown: self.breakdown(profile, &points),
            suggestions,
        }
    }

    pub fn section_points(&self, profile: &UserProfile) -> SectionPoints {
        SectionPoints {
            basic_info: basic_info_points(profile),
            skills: points_for(SKILL_BUCKETS, profile.skills.len()),
            interests: points_for(INTEREST_BUCKETS, profile.interests.len()),
            bio: points_for(BIO_BUCKETS, trimmed_text_len(&profile.bio)),
            experience: match profile.experience_level {
                Some(_) => PROFILE_WEIGHTS.experience,
                None => points_for(INFERRED_EXPERIENCE_BUCKETS, profile.skills.len()),
            },
            profile_pic: if non_empty(&profile.profile_picture_url).is_some() {
                PROFILE_WEIGHTS.profile_pic
            } else {
                0
            },
        }
    }

    fn breakdown(&self, profile: &UserProfile, points: &SectionPoints) -> ProfileBreakdown {
        let skills = profile.skills.len();
        let inferred_full_at = full_credit_at(INFERRED_EXPERIENCE_BUCKETS) as f64;

        ProfileBreakdown {
            basic_info: percentage(
                u32::from(points.basic_info),
                u32::from(PROFILE_WEIGHTS.basic_info),
            ),
            skills: capped_percentage(skills, full_credit_at(SKILL_BUCKETS)),
            interests: capped_percentage(profile.interests.len(), full_credit_at(INTEREST_BUCKETS)),
            bio: capped_percentage(trimmed_text_len(&profile.bio), full_credit_at(BIO_BUCKETS)),
            experience: match profile.experience_level {
                Some(_) => 100,
                None => (skills as f64 / inferred_full_at * 100.0)
                    .min(INFERRED_EXPERIENCE_BREAKDOWN_CAP)
                    .round() as u8,
            },
            profile_pic: if points.profile_pic > 0 { 100 } else { 0 },
        }
    }
}

fn basic_info_points(profile: &UserProfile) -> u8 {
    let present = [
        non_blank(&profile.display_name).is_some(),
        non_empty(&profile.email).is_some(),
        non_blank(&profile.location).is_some(),
        profile.role.is_some(),
    ]
    .into_iter()
    .filter(|present| *present)
    .count() as u8;

    present * BASIC_INFO_FIELD_POINTS
}

fn percentage(points: u32, max: u32) -> u8 {
    if max == 0 {
        return 0;
    }
    (f64::from(points) / f64::from(max) * 100.0)
        .round()
        .clamp(0.0, 100.0) as u8
}

fn capped_percentage(count: usize, full_at: usize) -> u8 {
    if full_at == 0 {
        return 100;
    }
    (count.min(full_at) as f64 / full_at as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::QualityTier;
    use crate::taxonomy::{ExperienceLevel, Role};

    fn named(n: usize, prefix: &str) -> Vec<String> {
        (0..n).map(|i| format!("{prefix}{i}")).collect()
    }

    fn basic_only() -> UserProfile {
        UserProfile {
            display_name: Some("Ada".into()),
            email: Some("ada@campus.edu".into()),
            role: Some(Role::Seeker),
            ..UserProfile::default()
        }
    }

    fn complete() -> UserProfile {
        UserProfile {
            display_name: Some("Ada".into()),
            email: Some("ada@campus.edu".into()),
            role: Some(Role::Finder),
            location: Some("Campus A".into()),
            skills: named(8, "skill"),
            interests: named(6, "interest"),
            bio: Some("x".repeat(200)),
            experience_level: Some(ExperienceLevel::Advanced),
            profile_picture_url: Some("https://img.example/ada.png".into()),
            ..UserProfile::default()
        }
    }

    #[test]
    fn weights_sum_to_one_hundred() {
        assert_eq!(PROFILE_WEIGHTS.sum(), 100);
    }

    #[test]
    fn basic_info_only_is_incomplete() {
        let result = calculate_profile_score(Some(&basic_only()));

        assert_eq!(result.score, 15);
        assert_eq!(result.quality_tier, QualityTier::Incomplete);
        assert_eq!(result.breakdown.basic_info, 75);
        assert_eq!(result.suggestions.len(), 6);
        assert_eq!(
            result.suggestions.last().map(String::as_str),
            Some("Complete more profile sections to improve your profile score")
        );
    }

    #[test]
    fn complete_profile_is_excellent() {
        let result = calculate_profile_score(Some(&complete()));

        assert_eq!(result.score, 100);
        assert_eq!(result.quality_tier, QualityTier::Excellent);
        assert_eq!(
            result.breakdown,
            ProfileBreakdown {
                basic_info: 100,
                skills: 100,
                interests: 100,
                bio: 100,
                experience: 100,
                profile_pic: 100,
            }
        );
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn missing_profile_scores_zero() {
        assert_eq!(calculate_profile_score(None), ProfileScoreResult::empty());
    }

    #[test]
    fn blank_name_and_location_earn_nothing() {
        let profile = UserProfile {
            display_name: Some("   ".into()),
            location: Some(" ".into()),
            email: Some(String::new()),
            ..UserProfile::default()
        };
        let points = ProfileScorer.section_points(&profile);
        assert_eq!(points.basic_info, 0);

        // Whitespace location is still "present" for the location suggestion.
        let result = ProfileScorer.score(&profile);
        assert!(!result
            .suggestions
            .iter()
            .any(|s| s.starts_with("Add your location")));
    }

    #[test]
    fn experience_is_inferred_from_skill_count() {
        let mut profile = basic_only();
        profile.skills = named(1, "s");
        assert_eq!(ProfileScorer.section_points(&profile).experience, 0);
        profile.skills = named(2, "s");
        assert_eq!(ProfileScorer.section_points(&profile).experience, 5);
        profile.skills = named(5, "s");
        assert_eq!(ProfileScorer.section_points(&profile).experience, 10);

        profile.experience_level = Some(ExperienceLevel::Beginner);
        profile.skills.clear();
        assert_eq!(ProfileScorer.section_points(&profile).experience, 15);
    }

    #[test]
    fn mid_profile_scores_each_section() {
        let profile = UserProfile {
            display_name: Some("Lin".into()),
            email: Some("lin@campus.edu".into()),
            location: Some("Campus B".into()),
            role: Some(Role::Seeker),
            skills: named(4, "s"),
            interests: named(3, "i"),
            bio: Some("y".repeat(60)),
            ..UserProfile::default()
        };

        let points = ProfileScorer.section_points(&profile);
        assert_eq!(points.basic_info, 20);
        assert_eq!(points.skills, 20);
        assert_eq!(points.interests, 12);
        assert_eq!(points.bio, 10);
        assert_eq!(points.experience, 5);
        assert_eq!(points.profile_pic, 0);

        let result = ProfileScorer.score(&profile);
        assert_eq!(result.score, 67);
        assert_eq!(result.quality_tier, QualityTier::Good);
        assert_eq!(
            result.suggestions,
            vec!["Add a profile picture to make your profile stand out".to_string()]
        );
        assert_eq!(result.breakdown.skills, 50);
        assert_eq!(result.breakdown.interests, 50);
        assert_eq!(result.breakdown.bio, 40);
        assert_eq!(result.breakdown.experience, 67);
    }

    #[test]
    fn inferred_experience_breakdown_scales_with_skills() {
        let mut profile = UserProfile::default();
        profile.skills = named(2, "s");
        assert_eq!(ProfileScorer.score(&profile).breakdown.experience, 40);
        profile.skills = named(3, "s");
        assert_eq!(ProfileScorer.score(&profile).breakdown.experience, 60);
        profile.skills = named(9, "s");
        assert_eq!(ProfileScorer.score(&profile).breakdown.experience, 67);
    }

    #[test]
    fn bio_length_counts_utf16_units() {
        let profile = UserProfile {
            bio: Some("😀".repeat(25)),
            ..UserProfile::default()
        };

        assert_eq!(ProfileScorer.section_points(&profile).bio, 10);

        let result = ProfileScorer.score(&profile);
        assert_eq!(result.score, 10);
        assert_eq!(result.breakdown.bio, 33);
        assert!(
            !result
                .suggestions
                .iter()
                .any(|s| s.starts_with("Write a longer bio"))
        );
    }

    #[test]
    fn suggestions_never_exceed_six() {
        for profile in [UserProfile::default(), basic_only(), complete()] {
            assert!(ProfileScorer.score(&profile).suggestions.len() <= 6);
        }
    }
}
