use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between reading a URL and producing a result
///
/// Only the `Display` text reaches the JSON output.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid URL {url:?}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{status} for url: {url}")]
    Status { status: StatusCode, url: String },

    #[error("invalid input: {0}")]
    Input(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(String),
}
