use crate::error::ScrapeError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// User agent sent with every request, identifies as a desktop Chrome
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Configuration for fetching and extracting a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Value of the User-Agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum length of `text_content`, in characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Maximum number of navigation items kept
    #[serde(default = "default_max_navigation_items")]
    pub max_navigation_items: usize,

    /// Paragraphs must be strictly longer than this many characters
    #[serde(default = "default_min_paragraph_chars")]
    pub min_paragraph_chars: usize,
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_max_text_chars() -> usize {
    8000
}

fn default_max_navigation_items() -> usize {
    20
}

fn default_min_paragraph_chars() -> usize {
    20
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_text_chars: default_max_text_chars(),
            max_navigation_items: default_max_navigation_items(),
            min_paragraph_chars: default_min_paragraph_chars(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ScrapeError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            ScrapeError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ScrapeError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ScrapeError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ScrapeError> {
        if self.timeout_secs == 0 {
            return Err(ScrapeError::Config(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
