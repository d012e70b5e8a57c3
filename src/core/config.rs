use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TTL_SECS, DEFAULT_FALLBACK_QUERY,
    DEFAULT_OVERLAP_WEIGHT, DEFAULT_SIMILARITY_WEIGHT, DEFAULT_TOP_K,
};

/// Runtime tunables for the parser, ranker and dialogue engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SousChefConfig {
    pub corpus_path: String,

    pub top_k: usize,

    pub similarity_weight: f64,
    pub overlap_weight: f64,

    pub fallback_query: String,

    pub cache_capacity: usize,
    pub cache_ttl_secs: u64,
}

impl Default for SousChefConfig {
    fn default() -> Self {
        Self {
            corpus_path: "data/recipes.json".to_string(),
            top_k: DEFAULT_TOP_K,
            similarity_weight: DEFAULT_SIMILARITY_WEIGHT,
            overlap_weight: DEFAULT_OVERLAP_WEIGHT,
            fallback_query: DEFAULT_FALLBACK_QUERY.to_string(),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl SousChefConfig {
    /// Build a config from `SOUSCHEF_*` environment variables, falling back
    /// to the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            corpus_path: std::env::var("SOUSCHEF_CORPUS").unwrap_or(defaults.corpus_path),
            top_k: env_parse("SOUSCHEF_TOP_K", defaults.top_k),
            similarity_weight: env_parse("SOUSCHEF_SIMILARITY_WEIGHT", defaults.similarity_weight),
            overlap_weight: env_parse("SOUSCHEF_OVERLAP_WEIGHT", defaults.overlap_weight),
            fallback_query: std::env::var("SOUSCHEF_FALLBACK_QUERY")
                .unwrap_or(defaults.fallback_query),
            cache_capacity: env_parse("SOUSCHEF_CACHE_CAPACITY", defaults.cache_capacity),
            cache_ttl_secs: env_parse("SOUSCHEF_CACHE_TTL", defaults.cache_ttl_secs),
        }
    }
}

fn env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_sum_to_one() {
        let config = SousChefConfig::default();
        assert!((config.similarity_weight + config.overlap_weight - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_fallback_query() {
        let config = SousChefConfig::default();
        assert_eq!(config.fallback_query, "easy quick dinner");
        assert_eq!(config.top_k, 5);
    }
}
