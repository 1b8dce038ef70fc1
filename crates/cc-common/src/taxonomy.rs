use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Opportunity categories a finder can post under.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum JobType {
    #[serde(rename = "Academic Projects")]
    #[strum(to_string = "Academic Projects", serialize = "academic")]
    AcademicProjects,
    #[serde(rename = "Startup/Collaborations")]
    #[strum(to_string = "Startup/Collaborations", serialize = "startup")]
    StartupCollaborations,
    #[serde(rename = "Part-time Jobs")]
    #[strum(to_string = "Part-time Jobs", serialize = "part-time")]
    PartTimeJobs,
    #[serde(rename = "Competitions/Hackathons")]
    #[strum(to_string = "Competitions/Hackathons", serialize = "hackathon")]
    CompetitionsHackathons,
    #[serde(rename = "Team Search")]
    #[strum(to_string = "Team Search", serialize = "team")]
    TeamSearch,
}

/// Ordered experience scale; adjacency on this scale earns partial credit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    /// Position on the beginner → advanced scale.
    pub fn rank(self) -> u8 {
        match self {
            Self::Beginner => 0,
            Self::Intermediate => 1,
            Self::Advanced => 2,
        }
    }

    /// Number of steps between two levels (0, 1 or 2).
    pub fn distance(self, other: Self) -> u8 {
        self.rank().abs_diff(other.rank())
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    /// Posts opportunities.
    Finder,
    /// Browses and applies.
    Seeker,
}
