//! Runtime configuration: upstream API location and per-recommender parameters

use crate::similarity::Threshold;
use crate::text::TokenizerConfig;

/// Default base URL of the blog API
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Default timeout for upstream requests
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Path of the blog corpus endpoint
pub const BLOGS_PATH: &str = "/api/blog/recommendation-data";

/// Path of the public likes endpoint
pub const LIKES_PATH: &str = "/api/likes/all-public";

const API_URL_ENV_VAR: &str = "BLOGREC_API_URL";
const TIMEOUT_ENV_VAR: &str = "BLOGREC_TIMEOUT";

/// Category names that trigger the category fallback
pub const VALID_CATEGORIES: &[&str] = &[
    "technology",
    "programming",
    "lifestyle",
    "entertainment",
    "music",
    "movies",
    "sports",
    "travel",
    "food",
    "nature",
    "health",
    "education",
    "bollywood",
    "fashion",
    "personal",
    "news",
];

/// Where blog and like data is fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Base URL of the blog API, without trailing path
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

impl SourceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(API_URL_ENV_VAR) {
            if !url.is_empty() {
                config.base_url = url;
            }
        }

        if let Ok(timeout) = std::env::var(TIMEOUT_ENV_VAR) {
            if let Ok(seconds) = timeout.parse::<u64>() {
                config.timeout_seconds = clamp_timeout(seconds);
            }
        }

        config
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = clamp_timeout(seconds);
        self
    }

    pub fn blogs_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), BLOGS_PATH)
    }

    pub fn likes_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), LIKES_PATH)
    }
}

fn clamp_timeout(seconds: u64) -> u64 {
    seconds.clamp(1, 300)
}

/// Free-text / category query recommender parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    pub threshold: Threshold,
    /// Score assigned to documents pulled in by category match only
    pub fallback_score: f64,
    pub categories: &'static [&'static str],
    pub tokenizer: TokenizerConfig,
    /// Decimal places of the emitted score
    pub precision: u32,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::Inclusive(0.05),
            fallback_score: 0.03,
            categories: VALID_CATEGORIES,
            tokenizer: TokenizerConfig::content(),
            precision: 2,
        }
    }
}

/// Related-post recommender parameters
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedConfig {
    pub threshold: Threshold,
    pub limit: usize,
    /// Vocabulary cap; `None` keeps every corpus term
    pub max_terms: Option<usize>,
    pub tokenizer: TokenizerConfig,
    pub precision: u32,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            threshold: Threshold::Exclusive(0.05),
            limit: 6,
            max_terms: Some(1000),
            tokenizer: TokenizerConfig::related(),
            precision: 2,
        }
    }
}

/// Collaborative recommender parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollabConfig {
    pub limit: usize,
    /// Fewer interacting blogs than this yields no recommendations
    pub min_items: usize,
    pub precision: u32,
}

impl Default for CollabConfig {
    fn default() -> Self {
        Self {
            limit: 5,
            min_items: 2,
            precision: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_urls() {
        let config = SourceConfig::default();
        assert_eq!(
            config.blogs_url(),
            "http://localhost:8000/api/blog/recommendation-data"
        );
        assert_eq!(config.likes_url(), "http://localhost:8000/api/likes/all-public");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = SourceConfig {
            base_url: "http://api.example/".to_string(),
            ..SourceConfig::default()
        };
        assert_eq!(config.likes_url(), "http://api.example/api/likes/all-public");
    }

    #[test]
    fn test_timeout_is_clamped() {
        assert_eq!(SourceConfig::default().with_timeout(0).timeout_seconds, 1);
        assert_eq!(SourceConfig::default().with_timeout(9999).timeout_seconds, 300);
    }

    #[test]
    fn test_recommender_defaults() {
        assert_eq!(ContentConfig::default().categories.len(), 16);
        assert_eq!(RelatedConfig::default().limit, 6);
        assert_eq!(CollabConfig::default().limit, 5);
    }

    #[test]
    fn test_threshold_boundaries() {
        let content = ContentConfig::default().threshold;
        let related = RelatedConfig::default().threshold;
        assert_eq!(content, Threshold::Inclusive(0.05));
        assert_eq!(related, Threshold::Exclusive(0.05));
        assert!(content.admits(0.05));
        assert!(!related.admits(0.05));
    }
}
