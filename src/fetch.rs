use crate::charset::decode_html;
use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

/// HTTP client for a single page fetch
///
/// Built explicitly from the configuration and owned by the caller; there is
/// no shared client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a client with the configured timeout and user agent
    pub fn new(config: &ScraperConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// GET the page and return its body as text
    ///
    /// Any non-2xx final status is an error. The body is decoded with the
    /// charset from its byte order mark, the Content-Type header or its own
    /// `<meta>` declaration.
    pub async fn fetch(&self, url: &Url) -> Result<String, ScrapeError> {
        ::log::debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(ScrapeError::Status {
                status,
                url: response.url().to_string(),
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;
        ::log::debug!("Fetched {} bytes from {} ({})", body.len(), url, status);

        Ok(decode_html(&body, content_type.as_deref()))
    }
}
