pub mod analytics;
pub mod config;
pub mod date;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod profile;
pub mod skill_normalizer;
pub mod snapshot;
pub mod taxonomy;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use normalize::{empty_as_none, null_as_default};
use taxonomy::{ExperienceLevel, JobType, Role};

/// A job, project or team listing as stored in the `jobs` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPosting {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub required_skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(rename = "type", default, deserialize_with = "empty_as_none")]
    pub job_type: Option<JobType>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub experience_level: Option<ExperienceLevel>,
    /// Unparseable timestamps are read as `None` and rank as the oldest postings.
    #[serde(
        default,
        deserialize_with = "date::created_at::deserialize_lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<String>,
    /// `None` when the listing never recorded the flag; only `Some(false)` is an open listing.
    #[serde(default)]
    pub is_filled: Option<bool>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub applications: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub posted_by: Option<String>,
}

/// A user document; seekers and finders share the shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub role: Option<Role>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub interests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferred_job_types: Vec<JobType>,
}
