use std::str::FromStr;

use tracing::debug;

use crate::matching::behavior::BoostConfig;

/// Number of jobs shown in the dashboard's "recommended for you" strip.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingConfig {
    pub boost: BoostConfig,
    pub recommendation_limit: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            boost: BoostConfig::default(),
            recommendation_limit: DEFAULT_RECOMMENDATION_LIMIT,
        }
    }
}

impl RankingConfig {
    /// Defaults overridden by `CC_BOOST_*` / `CC_RECOMMENDATION_LIMIT` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RankingConfig::from_env`] with an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            boost: BoostConfig {
                applied_points: parse_override(
                    &lookup,
                    "CC_BOOST_APPLIED_POINTS",
                    defaults.boost.applied_points,
                )?,
                viewed_points: parse_override(
                    &lookup,
                    "CC_BOOST_VIEWED_POINTS",
                    defaults.boost.viewed_points,
                )?,
                viewed_threshold: parse_override(
                    &lookup,
                    "CC_BOOST_VIEWED_THRESHOLD",
                    defaults.boost.viewed_threshold,
                )?,
                bookmarked_points: parse_override(
                    &lookup,
                    "CC_BOOST_BOOKMARKED_POINTS",
                    defaults.boost.bookmarked_points,
                )?,
            },
            recommendation_limit: parse_override(
                &lookup,
                "CC_RECOMMENDATION_LIMIT",
                defaults.recommendation_limit,
            )?,
        };

        debug!(?config, "ranking config resolved");
        Ok(config)
    }
}

fn parse_override<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_overrides() {
        let config = RankingConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, RankingConfig::default());
        assert_eq!(config.boost.max_boost(), 10);
        assert_eq!(config.recommendation_limit, 5);
    }

    #[test]
    fn applies_overrides() {
        let config = RankingConfig::from_lookup(lookup_from(&[
            ("CC_BOOST_APPLIED_POINTS", "7"),
            ("CC_BOOST_VIEWED_THRESHOLD", " 10 "),
            ("CC_RECOMMENDATION_LIMIT", "3"),
            ("CC_BOOST_BOOKMARKED_POINTS", ""),
        ]))
        .unwrap();

        assert_eq!(config.boost.applied_points, 7);
        assert_eq!(config.boost.viewed_threshold, 10);
        assert_eq!(config.boost.bookmarked_points, 2);
        assert_eq!(config.recommendation_limit, 3);
    }

    #[test]
    fn rejects_unparseable_overrides() {
        let err = RankingConfig::from_lookup(lookup_from(&[("CC_BOOST_VIEWED_POINTS", "many")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                key: "CC_BOOST_VIEWED_POINTS",
                value: "many".into()
            }
        );
        assert!(err.to_string().contains("CC_BOOST_VIEWED_POINTS"));
    }
}
