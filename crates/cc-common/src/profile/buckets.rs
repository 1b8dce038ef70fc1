//! Step-function point tables used by profile scoring.
//!
//! Each table is ordered from the highest threshold down; the first bucket whose
//! `min` the count reaches wins. The last bucket always has `min: 0`.

use super::QualityTier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountBucket {
    pub min: usize,
    pub points: u8,
}

const fn bucket(min: usize, points: u8) -> CountBucket {
    CountBucket { min, points }
}

/// 0 → 0, 1–3 → 15, 4–7 → 20, 8+ → 25
pub const SKILL_BUCKETS: &[CountBucket] = &[bucket(8, 25), bucket(4, 20), bucket(1, 15), bucket(0, 0)];

/// 0 → 0, 1–2 → 8, 3–5 → 12, 6+ → 15
pub const INTEREST_BUCKETS: &[CountBucket] =
    &[bucket(6, 15), bucket(3, 12), bucket(1, 8), bucket(0, 0)];

/// Trimmed bio characters: 0 → 0, 1–49 → 5, 50–149 → 10, 150+ → 15
pub const BIO_BUCKETS: &[CountBucket] =
    &[bucket(150, 15), bucket(50, 10), bucket(1, 5), bucket(0, 0)];

/// Experience inferred from skill count when no level is set: 5+ → 10, 2+ → 5
pub const INFERRED_EXPERIENCE_BUCKETS: &[CountBucket] = &[bucket(5, 10), bucket(2, 5), bucket(0, 0)];

/// Inclusive lower bounds, highest first. Scores below the last bound are `Incomplete`.
pub const TIER_THRESHOLDS: &[(u8, QualityTier)] = &[
    (90, QualityTier::Excellent),
    (75, QualityTier::VeryGood),
    (60, QualityTier::Good),
    (40, QualityTier::Fair),
    (20, QualityTier::Basic),
];

pub fn points_for(buckets: &[CountBucket], count: usize) -> u8 {
    buckets
        .iter()
        .find(|b| count >= b.min)
        .map_or(0, |b| b.points)
}

/// Count at which a table awards its maximum points.
pub fn full_credit_at(buckets: &[CountBucket]) -> usize {
    buckets.first().map_or(0, |b| b.min)
}

pub fn tier_for(score: u8) -> QualityTier {
    TIER_THRESHOLDS
        .iter()
        .find(|(min, _)| score >= *min)
        .map_or(QualityTier::Incomplete, |(_, tier)| *tier)
}
