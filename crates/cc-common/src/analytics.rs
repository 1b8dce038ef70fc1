use serde::Serialize;

use crate::{JobPosting, matching::prefilter::PUBLISHED_STATUS};

/// Jobs listed in the "top jobs" table.
pub const TOP_JOBS_LIMIT: usize = 5;

/// Engagement summary over one finder's postings.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobAnalytics {
    pub total_jobs: usize,
    pub total_views: u64,
    pub total_applications: u64,
    /// Applications per 100 views, one decimal; 0 without views.
    pub interest_rate: f64,
    pub active_jobs: usize,
    pub filled_jobs: usize,
    pub top_jobs: Vec<TopJob>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopJob {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub applications: u32,
    pub views: u32,
}

impl From<&JobPosting> for TopJob {
    fn from(job: &JobPosting) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            applications: job.applications,
            views: job.views,
        }
    }
}

pub fn summarize_jobs(jobs: &[JobPosting]) -> JobAnalytics {
    let total_views: u64 = jobs.iter().map(|j| u64::from(j.views)).sum();
    let total_applications: u64 = jobs.iter().map(|j| u64::from(j.applications)).sum();

    // A posting without the flag counts as open here, unlike the seeker listing.
    let is_filled = |job: &JobPosting| job.is_filled.unwrap_or(false);
    let active_jobs = jobs
        .iter()
        .filter(|j| !is_filled(j) && j.status.as_deref() == Some(PUBLISHED_STATUS))
        .count();
    let filled_jobs = jobs.iter().filter(|j| is_filled(j)).count();

    let mut by_applications: Vec<&JobPosting> = jobs.iter().collect();
    by_applications.sort_by(|a, b| b.applications.cmp(&a.applications));
    let top_jobs = by_applications
        .into_iter()
        .take(TOP_JOBS_LIMIT)
        .map(TopJob::from)
        .collect();

    JobAnalytics {
        total_jobs: jobs.len(),
        total_views,
        total_applications,
        interest_rate: interest_rate(total_applications, total_views),
        active_jobs,
        filled_jobs,
        top_jobs,
    }
}

fn interest_rate(applications: u64, views: u64) -> f64 {
    if views == 0 {
        return 0.0;
    }
    let rate = applications as f64 / views as f64 * 100.0;
    (rate * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: &str, views: u32, applications: u32, filled: Option<bool>) -> JobPosting {
        JobPosting {
            id: Some(id.into()),
            title: Some(format!("Job {id}")),
            status: Some(PUBLISHED_STATUS.into()),
            is_filled: filled,
            views,
            applications,
            ..JobPosting::default()
        }
    }

    #[test]
    fn empty_list_has_zero_rate() {
        let summary = summarize_jobs(&[]);
        assert_eq!(summary.total_jobs, 0);
        assert_eq!(summary.interest_rate, 0.0);
        assert!(summary.top_jobs.is_empty());
    }

    #[test]
    fn totals_and_rate() {
        let jobs = vec![
            posting("a", 30, 2, Some(false)),
            posting("b", 0, 0, None),
            posting("c", 0, 1, Some(true)),
        ];

        let summary = summarize_jobs(&jobs);
        assert_eq!(summary.total_views, 30);
        assert_eq!(summary.total_applications, 3);
        assert_eq!(summary.interest_rate, 10.0);
        assert_eq!(summary.active_jobs, 2);
        assert_eq!(summary.filled_jobs, 1);
    }

    #[test]
    fn rate_rounds_to_one_decimal() {
        assert_eq!(interest_rate(1, 3), 33.3);
        assert_eq!(interest_rate(2, 3), 66.7);
    }

    #[test]
    fn drafts_are_not_active() {
        let mut draft = posting("d", 0, 0, Some(false));
        draft.status = Some("draft".into());
        assert_eq!(summarize_jobs(&[draft]).active_jobs, 0);
    }

    #[test]
    fn top_jobs_by_applications_keep_ties_in_order() {
        let jobs: Vec<JobPosting> = [("a", 1), ("b", 4), ("c", 4), ("d", 0), ("e", 9), ("f", 2)]
            .iter()
            .map(|(id, apps)| posting(id, 10, *apps, Some(false)))
            .collect();

        let summary = summarize_jobs(&jobs);
        let ids: Vec<&str> = summary
            .top_jobs
            .iter()
            .filter_map(|j| j.id.as_deref())
            .collect();
        assert_eq!(ids, vec!["e", "b", "c", "f", "a"]);
    }
}
