use serde::Serialize;
use strum::EnumIter;

use crate::{
    UserProfile,
    normalize::{non_empty, trimmed_text_len},
};

/// Suggestions shown on the profile page.
pub const DEFAULT_SUGGESTION_DISPLAY_LIMIT: usize = 3;

const MIN_SKILLS: usize = 3;
const MIN_INTERESTS: usize = 2;
const MIN_BIO_CHARS: usize = 50;
const MIN_HEALTHY_SCORE: u8 = 60;

/// Improvement hints in priority order; the declaration order is the display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    AddSkills,
    AddInterests,
    WriteLongerBio,
    AddLocation,
    AddProfilePicture,
    CompleteMoreSections,
}

impl Suggestion {
    pub fn message(self) -> &'static str {
        match self {
            Self::AddSkills => "Add at least 3 skills to improve your profile",
            Self::AddInterests => "Add interests to get better job recommendations",
            Self::WriteLongerBio => "Write a longer bio (50+ characters) to describe yourself",
            Self::AddLocation => "Add your location to match with nearby opportunities",
            Self::AddProfilePicture => "Add a profile picture to make your profile stand out",
            Self::CompleteMoreSections => {
                "Complete more profile sections to improve your profile score"
            }
        }
    }

    fn applies(self, profile: &UserProfile, score: u8) -> bool {
        match self {
            Self::AddSkills => profile.skills.len() < MIN_SKILLS,
            Self::AddInterests => profile.interests.len() < MIN_INTERESTS,
            Self::WriteLongerBio => trimmed_text_len(&profile.bio) < MIN_BIO_CHARS,
            Self::AddLocation => non_empty(&profile.location).is_none(),
            Self::AddProfilePicture => non_empty(&profile.profile_picture_url).is_none(),
            Self::CompleteMoreSections => score < MIN_HEALTHY_SCORE,
        }
    }
}

/// Every applicable suggestion, each at most once, in priority order.
pub fn improvement_suggestions(profile: &UserProfile, score: u8) -> Vec<Suggestion> {
    use strum::IntoEnumIterator;

    Suggestion::iter()
        .filter(|suggestion| suggestion.applies(profile, score))
        .collect()
}
