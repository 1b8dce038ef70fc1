pub mod behavior;
pub mod pipeline;
pub mod prefilter;
pub mod scoring;
pub mod skills;
pub mod weights;

pub use behavior::{BehaviorSignal, BoostConfig};
pub use pipeline::{JobRanker, ScoredJob, rank_jobs, recommend_jobs};
pub use prefilter::{JobFilter, JobFilterConfig};
pub use scoring::{MatchBreakdown, MatchScorer, calculate_match_breakdown, calculate_match_score};
