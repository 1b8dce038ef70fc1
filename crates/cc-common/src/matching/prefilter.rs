use crate::{JobPosting, normalize::non_empty, taxonomy::JobType};

/// Status value of a job visible to seekers.
pub const PUBLISHED_STATUS: &str = "published";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobFilterConfig {
    /// Case-insensitive substring looked up in title, description, tags and required skills.
    pub search_term: Option<String>,
    /// Keep only this job type.
    pub job_type: Option<JobType>,
    /// Skip the published / not-filled check (finder-side views).
    pub include_unlisted: bool,
}

/// Narrows the job list before ranking, the way the seeker dashboard does.
#[derive(Debug, Clone, Default)]
pub struct JobFilter {
    config: JobFilterConfig,
    search_lower: Option<String>,
}

impl JobFilter {
    pub fn new(config: JobFilterConfig) -> Self {
        let search_lower = non_empty(&config.search_term).map(str::to_lowercase);
        Self {
            config,
            search_lower,
        }
    }

    /// Published and explicitly marked as not filled.
    pub fn is_listed(job: &JobPosting) -> bool {
        job.status.as_deref() == Some(PUBLISHED_STATUS) && job.is_filled == Some(false)
    }

    pub fn matches_search(&self, job: &JobPosting) -> bool {
        let Some(needle) = self.search_lower.as_deref() else {
            return true;
        };
        let contains = |text: &str| text.to_lowercase().contains(needle);

        job.title.as_deref().is_some_and(contains)
            || job.description.as_deref().is_some_and(contains)
            || job.tags.iter().any(|tag| contains(tag))
            || job.required_skills.iter().any(|skill| contains(skill))
    }

    pub fn matches_type(&self, job: &JobPosting) -> bool {
        self.config
            .job_type
            .is_none_or(|wanted| job.job_type == Some(wanted))
    }

    pub fn accepts(&self, job: &JobPosting) -> bool {
        (self.config.include_unlisted || Self::is_listed(job))
            && self.matches_search(job)
            && self.matches_type(job)
    }

    /// Accepted jobs, cloned, in input order.
    pub fn filter_jobs(&self, jobs: &[JobPosting]) -> Vec<JobPosting> {
        jobs.iter().filter(|job| self.accepts(job)).cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listed(title: &str) -> JobPosting {
        JobPosting {
            title: Some(title.into()),
            status: Some(PUBLISHED_STATUS.into()),
            is_filled: Some(false),
            job_type: Some(JobType::AcademicProjects),
            ..JobPosting::default()
        }
    }

    #[test]
    fn drops_unpublished_and_filled_jobs() {
        let mut draft = listed("draft");
        draft.status = Some("draft".into());
        let mut filled = listed("filled");
        filled.is_filled = Some(true);
        let mut unknown = listed("unknown");
        unknown.is_filled = None;

        let filter = JobFilter::default();
        let kept = filter.filter_jobs(&[listed("open"), draft, filled, unknown]);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title.as_deref(), Some("open"));
    }

    #[test]
    fn include_unlisted_skips_listing_check() {
        let mut filled = listed("filled");
        filled.is_filled = Some(true);
        let filter = JobFilter::new(JobFilterConfig {
            include_unlisted: true,
            ..JobFilterConfig::default()
        });
        assert_eq!(filter.filter_jobs(&[filled]).len(), 1);
    }

    #[test]
    fn search_covers_title_description_tags_and_skills() {
        let filter = JobFilter::new(JobFilterConfig {
            search_term: Some("PYTHON".into()),
            ..JobFilterConfig::default()
        });

        let by_title = listed("Python tutor");
        let mut by_description = listed("Tutor");
        by_description.description = Some("Teach python basics".into());
        let mut by_tag = listed("Research");
        by_tag.tags = vec!["python".into()];
        let mut by_skill = listed("Analyst");
        by_skill.required_skills = vec!["Python 3".into()];
        let unrelated = listed("Barista");

        assert!(filter.matches_search(&by_title));
        assert!(filter.matches_search(&by_description));
        assert!(filter.matches_search(&by_tag));
        assert!(filter.matches_search(&by_skill));
        assert!(!filter.matches_search(&unrelated));
    }

    #[test]
    fn empty_search_term_matches_everything() {
        let filter = JobFilter::new(JobFilterConfig {
            search_term: Some(String::new()),
            ..JobFilterConfig::default()
        });
        assert!(filter.matches_search(&listed("anything")));
    }

    #[test]
    fn type_filter_is_exact() {
        let filter = JobFilter::new(JobFilterConfig {
            job_type: Some(JobType::TeamSearch),
            ..JobFilterConfig::default()
        });
        let mut team = listed("team");
        team.job_type = Some(JobType::TeamSearch);
        let mut untyped = listed("untyped");
        untyped.job_type = None;

        let kept = filter.filter_jobs(&[listed("academic"), team, untyped]);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].title.as_deref(), Some("team"));
    }
}
