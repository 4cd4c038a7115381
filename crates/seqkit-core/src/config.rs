//! Runtime configuration that operator crates can serialize/deserialize.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Algorithm used by `SortedMerge` to pick the next head among N inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeStrategy {
    /// Scan every live cursor per element: O(N) per yielded element.
    #[default]
    Scan,
    /// Binary heap keyed by (head, input index): O(log N) per element.
    Heap,
}

impl std::str::FromStr for MergeStrategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(MergeStrategy::Scan),
            "heap" => Ok(MergeStrategy::Heap),
            other => Err(Error::Config(format!("unknown merge strategy '{other}'"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeqConfig {
    /// Initial hash bucket count of a `Lookup`. Grows to `count * 2 + 1`.
    pub lookup_initial_buckets: usize,

    /// Default `SortedMerge` strategy. Both strategies yield identical output.
    pub merge_strategy: MergeStrategy,

    /// Lookback window for `bind_by_index` when the caller passes none.
    /// `None` retains unbounded history.
    pub default_lookback: Option<usize>,
}

impl Default for SeqConfig {
    fn default() -> Self {
        Self {
            lookup_initial_buckets: 7,
            merge_strategy: MergeStrategy::Scan,
            default_lookback: None,
        }
    }
}

static GLOBAL: Lazy<SeqConfig> = Lazy::new(SeqConfig::from_env);

impl SeqConfig {
    /// Process-wide configuration, read from the environment on first use.
    pub fn global() -> &'static SeqConfig {
        &GLOBAL
    }

    /// Create a config from environment variables, falling back to defaults.
    ///
    /// Environment variables:
    /// - `SEQKIT_LOOKUP_BUCKETS`: initial Lookup bucket count
    /// - `SEQKIT_MERGE_STRATEGY`: `scan` or `heap`
    /// - `SEQKIT_LOOKBACK`: default bind-by-index lookback (`unbounded` for none)
    ///
    /// Unparseable or invalid values are ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(s) = std::env::var("SEQKIT_LOOKUP_BUCKETS") {
            if let Ok(v) = s.trim().parse::<usize>() {
                if v > 0 {
                    cfg.lookup_initial_buckets = v;
                }
            }
        }

        if let Ok(s) = std::env::var("SEQKIT_MERGE_STRATEGY") {
            if let Ok(v) = s.parse::<MergeStrategy>() {
                cfg.merge_strategy = v;
            }
        }

        if let Ok(s) = std::env::var("SEQKIT_LOOKBACK") {
            let s = s.trim();
            if s.eq_ignore_ascii_case("unbounded") {
                cfg.default_lookback = None;
            } else if let Ok(v) = s.parse::<usize>() {
                cfg.default_lookback = Some(v);
            }
        }

        cfg
    }

    /// Parse and validate a JSON config document. Missing fields take defaults.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: SeqConfig = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lookup_initial_buckets == 0 {
            return Err(Error::Config(
                "lookup_initial_buckets must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    pub fn with_lookup_buckets(mut self, buckets: usize) -> Self {
        self.lookup_initial_buckets = buckets;
        self
    }

    pub fn with_default_lookback(mut self, lookback: Option<usize>) -> Self {
        self.default_lookback = lookback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = SeqConfig::default();
        assert_eq!(cfg.lookup_initial_buckets, 7);
        assert_eq!(cfg.merge_strategy, MergeStrategy::Scan);
        assert_eq!(cfg.default_lookback, None);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_json_partial_document() {
        let cfg = SeqConfig::from_json_str(r#"{ "merge_strategy": "heap" }"#).unwrap();
        assert_eq!(cfg.merge_strategy, MergeStrategy::Heap);
        assert_eq!(cfg.lookup_initial_buckets, 7);
    }

    #[test]
    fn test_json_rejects_zero_buckets() {
        let err = SeqConfig::from_json_str(r#"{ "lookup_initial_buckets": 0 }"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_merge_strategy_parse() {
        assert_eq!(" Heap ".parse::<MergeStrategy>().unwrap(), MergeStrategy::Heap);
        assert!("fastest".parse::<MergeStrategy>().is_err());
    }
}
