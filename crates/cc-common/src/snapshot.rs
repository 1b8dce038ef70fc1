//! Reads JSON exports of the job and user collections.
//!
//! A jobs snapshot is an array of job documents, a profile snapshot is one
//! user document and a behaviour snapshot is one object with the three id lists.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;
use tracing::info;

use crate::{JobPosting, UserProfile, matching::behavior::BehaviorSignal};

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid snapshot {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl SnapshotError {
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } | Self::Json { path, .. } => path,
        }
    }
}

pub fn parse_jobs(raw: &str) -> Result<Vec<JobPosting>, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn parse_profile(raw: &str) -> Result<UserProfile, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn parse_behavior(raw: &str) -> Result<BehaviorSignal, serde_json::Error> {
    serde_json::from_str(raw)
}

pub fn read_jobs<R: Read>(reader: R) -> Result<Vec<JobPosting>, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub fn read_profile<R: Read>(reader: R) -> Result<UserProfile, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub fn read_behavior<R: Read>(reader: R) -> Result<BehaviorSignal, serde_json::Error> {
    serde_json::from_reader(reader)
}

pub fn load_jobs(path: impl AsRef<Path>) -> Result<Vec<JobPosting>, SnapshotError> {
    let jobs: Vec<JobPosting> = load_json(path.as_ref())?;
    info!(path = %path.as_ref().display(), jobs = jobs.len(), "loaded jobs snapshot");
    Ok(jobs)
}

pub fn load_profile(path: impl AsRef<Path>) -> Result<UserProfile, SnapshotError> {
    let profile: UserProfile = load_json(path.as_ref())?;
    info!(
        path = %path.as_ref().display(),
        uid = profile.uid.as_deref().unwrap_or("unknown"),
        "loaded profile snapshot"
    );
    Ok(profile)
}

pub fn load_behavior(path: impl AsRef<Path>) -> Result<BehaviorSignal, SnapshotError> {
    let behavior: BehaviorSignal = load_json(path.as_ref())?;
    info!(
        path = %path.as_ref().display(),
        applied = behavior.applied_job_ids.len(),
        viewed = behavior.viewed_job_ids.len(),
        bookmarked = behavior.bookmarked_job_ids.len(),
        "loaded behavior snapshot"
    );
    Ok(behavior)
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, SnapshotError> {
    let file = File::open(path).map_err(|source| SnapshotError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| SnapshotError::Json {
        path: path.to_path_buf(),
        source,
    })
}
