use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::fetch::HttpFetcher;
use crate::parsers;
use crate::results::ScrapeResult;
use crate::utils::normalize_url;
use std::path::Path;
use url::Url;

/// Builder for fetching one page and extracting its metadata, content and navigation
#[derive(Debug, Clone, Default)]
pub struct PageExtractor {
    config: ScraperConfig,
}

impl PageExtractor {
    /// Create an extractor with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ScraperConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ScrapeError> {
        let config = ScraperConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.config.timeout_secs = timeout_seconds;
        self
    }

    /// Set the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    pub fn config(&self) -> &ScraperConfig {
        &self.config
    }

    /// Fetch and extract the page, reporting any failure as an error result
    ///
    /// The error result carries `url` exactly as it was passed in.
    pub async fn scrape(&self, url: &str) -> ScrapeResult {
        ::log::info!("Scraping {}", url);

        match self.try_scrape(url).await {
            Ok(result) => {
                ::log::info!("Scraped {}", url);
                result
            }
            Err(e) => {
                ::log::warn!("Scrape of {} failed: {}", url, e);
                ScrapeResult::failure(url, e)
            }
        }
    }

    /// Fetch and extract the page, propagating failures
    pub async fn try_scrape(&self, url: &str) -> Result<ScrapeResult, ScrapeError> {
        let (normalized, page_url) = parse_url(url)?;
        let fetcher = HttpFetcher::new(&self.config)?;
        let html = fetcher.fetch(&page_url).await?;

        Ok(self.assemble(normalized, &page_url, &html))
    }

    /// Extract from HTML that has already been fetched from `url`
    pub fn extract_html(&self, url: &str, html: &str) -> Result<ScrapeResult, ScrapeError> {
        let (normalized, page_url) = parse_url(url)?;
        Ok(self.assemble(normalized, &page_url, html))
    }

    fn assemble(&self, normalized: String, page_url: &Url, html: &str) -> ScrapeResult {
        let page = parsers::parse_page(html, page_url, &self.config);
        ScrapeResult::success(normalized, page)
    }
}

/// Normalize the URL, returning the normalized text alongside its parsed form
fn parse_url(url: &str) -> Result<(String, Url), ScrapeError> {
    let normalized = normalize_url(url);
    match Url::parse(&normalized) {
        Ok(parsed) => Ok((normalized, parsed)),
        Err(source) => Err(ScrapeError::InvalidUrl {
            url: normalized,
            source,
        }),
    }
}
