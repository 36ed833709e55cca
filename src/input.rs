use crate::error::ScrapeError;
use serde::Deserialize;

/// URL scraped when neither standard input nor the command line names one
pub const DEFAULT_URL: &str = "https://example.com";

/// JSON request accepted on standard input
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScrapeRequest {
    #[serde(default)]
    pub url: String,
}

/// Pick the URL to scrape
///
/// Non-blank standard input must be a JSON request and takes precedence over
/// the command-line argument; a request without `url` yields an empty URL.
pub fn resolve_url(stdin: &str, arg: Option<&str>) -> Result<String, ScrapeError> {
    let stdin = stdin.trim();

    if !stdin.is_empty() {
        let request: ScrapeRequest = serde_json::from_str(stdin)?;
        ::log::debug!("URL from standard input: {:?}", request.url);
        return Ok(request.url);
    }

    Ok(arg.unwrap_or(DEFAULT_URL).to_string())
}
