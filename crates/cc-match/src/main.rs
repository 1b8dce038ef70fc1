use std::{path::PathBuf, process::ExitCode};

use cc_common::{
    JobPosting, UserProfile,
    analytics::{JobAnalytics, summarize_jobs},
    config::{ConfigError, RankingConfig},
    logging::{init_tracing_subscriber, install_tracing_panic_hook},
    matching::{BehaviorSignal, JobFilter, JobFilterConfig, JobRanker, ScoredJob},
    profile::{MatchQualityScorer, calculate_profile_score},
    snapshot::{self, SnapshotError},
    taxonomy::JobType,
};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use serde::Serialize;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(
    name = "cc-match",
    about = "Score CampusConnect jobs and profiles from JSON snapshots"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and rank jobs for a seeker
    Rank(RankArgs),
    /// Top ranked jobs for a seeker's dashboard
    Recommend(RankArgs),
    /// Profile completeness score, tier and suggestions
    Profile(ProfileArgs),
    /// Match quality of one profile against every job
    Quality(QualityArgs),
    /// Engagement summary over posted jobs
    Analytics(AnalyticsArgs),
}

#[derive(Debug, Args)]
struct JobsArgs {
    /// JSON array of job documents
    #[arg(long, env = "CC_JOBS_PATH")]
    jobs: PathBuf,
}

#[derive(Debug, Args)]
struct FilterArgs {
    /// Case-insensitive text looked up in title, description, tags and skills
    #[arg(long)]
    search: Option<String>,

    /// Keep one job type, by display name ("Part-time Jobs") or by one of the
    /// aliases academic, startup, part-time, hackathon, team
    #[arg(long = "type")]
    job_type: Option<JobType>,

    /// Also keep drafts and filled jobs
    #[arg(long, default_value_t = false)]
    include_unlisted: bool,
}

impl FilterArgs {
    fn to_filter(&self) -> JobFilter {
        JobFilter::new(JobFilterConfig {
            search_term: self.search.clone(),
            job_type: self.job_type,
            include_unlisted: self.include_unlisted,
        })
    }
}

#[derive(Debug, Args)]
struct RankArgs {
    #[command(flatten)]
    jobs: JobsArgs,

    /// Seeker profile document
    #[arg(long, env = "CC_PROFILE_PATH")]
    profile: PathBuf,

    /// Applied / viewed / bookmarked job ids
    #[arg(long, env = "CC_BEHAVIOR_PATH")]
    behavior: Option<PathBuf>,

    #[command(flatten)]
    filter: FilterArgs,

    /// Maximum jobs to print (`recommend` defaults to CC_RECOMMENDATION_LIMIT)
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Debug, Args)]
struct ProfileArgs {
    #[arg(long, env = "CC_PROFILE_PATH")]
    profile: PathBuf,
}

#[derive(Debug, Args)]
struct QualityArgs {
    #[command(flatten)]
    jobs: JobsArgs,

    #[arg(long, env = "CC_PROFILE_PATH")]
    profile: PathBuf,

    #[command(flatten)]
    filter: FilterArgs,
}

#[derive(Debug, Args)]
struct AnalyticsArgs {
    #[command(flatten)]
    jobs: JobsArgs,

    /// Only count jobs posted by this user id
    #[arg(long)]
    posted_by: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to encode output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QualityEntry<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<&'a str>,
    quality_score: u8,
}

fn run(cli: Cli, config: RankingConfig) -> Result<String, CliError> {
    let output = match cli.command {
        Command::Rank(args) => {
            let ranked = rank(&args, &config, args.limit)?;
            serde_json::to_string_pretty(&ranked)?
        }
        Command::Recommend(args) => {
            let limit = args.limit.unwrap_or(config.recommendation_limit);
            let ranked = rank(&args, &config, Some(limit))?;
            serde_json::to_string_pretty(&ranked)?
        }
        Command::Profile(args) => {
            let profile = snapshot::load_profile(&args.profile)?;
            serde_json::to_string_pretty(&calculate_profile_score(Some(&profile)))?
        }
        Command::Quality(args) => {
            let jobs = snapshot::load_jobs(&args.jobs.jobs)?;
            let jobs = args.filter.to_filter().filter_jobs(&jobs);
            let profile = snapshot::load_profile(&args.profile)?;
            serde_json::to_string_pretty(&quality_entries(&jobs, &profile))?
        }
        Command::Analytics(args) => {
            let jobs = snapshot::load_jobs(&args.jobs.jobs)?;
            serde_json::to_string_pretty(&analytics(&jobs, args.posted_by.as_deref()))?
        }
    };
    Ok(output)
}

fn rank(
    args: &RankArgs,
    config: &RankingConfig,
    limit: Option<usize>,
) -> Result<Vec<ScoredJob>, CliError> {
    let jobs = snapshot::load_jobs(&args.jobs.jobs)?;
    let profile = snapshot::load_profile(&args.profile)?;
    let behavior = match &args.behavior {
        Some(path) => snapshot::load_behavior(path)?,
        None => BehaviorSignal::default(),
    };

    let candidates = args.filter.to_filter().filter_jobs(&jobs);
    info!(
        loaded = jobs.len(),
        candidates = candidates.len(),
        "filtered jobs"
    );

    Ok(rank_candidates(&candidates, &profile, &behavior, config, limit))
}

fn rank_candidates(
    jobs: &[JobPosting],
    profile: &UserProfile,
    behavior: &BehaviorSignal,
    config: &RankingConfig,
    limit: Option<usize>,
) -> Vec<ScoredJob> {
    let ranker = JobRanker::new(*config);
    match limit {
        Some(limit) => ranker.recommend(jobs, profile, behavior, limit),
        None => ranker.rank(jobs, profile, behavior),
    }
}

fn quality_entries<'a>(jobs: &'a [JobPosting], profile: &UserProfile) -> Vec<QualityEntry<'a>> {
    let scorer = MatchQualityScorer::default();
    jobs.iter()
        .map(|job| QualityEntry {
            id: job.id.as_deref(),
            title: job.title.as_deref(),
            quality_score: scorer.score(profile, job),
        })
        .collect()
}

fn analytics(jobs: &[JobPosting], posted_by: Option<&str>) -> JobAnalytics {
    match posted_by {
        Some(uid) => {
            let own: Vec<JobPosting> = jobs
                .iter()
                .filter(|job| job.posted_by.as_deref() == Some(uid))
                .cloned()
                .collect();
            summarize_jobs(&own)
        }
        None => summarize_jobs(jobs),
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let cli = Cli::parse();
    let result = RankingConfig::from_env()
        .map_err(CliError::from)
        .and_then(|config| run(cli, config));

    match result {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, "cc-match failed");
            ExitCode::FAILURE
        }
    }
}
