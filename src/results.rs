use serde::{Deserialize, Serialize};

use crate::utils::unix_timestamp;

/// Outcome of a scrape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// Result envelope printed by the binary
///
/// Either the three extraction records or `error` is populated, never both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResult {
    /// URL of the page (absent only when the failure happened before a URL was known)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub navigation: Option<Vec<NavigationItem>>,

    /// Human-readable failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Seconds since the Unix epoch at assembly time
    pub scraped_at: f64,
}

impl ScrapeResult {
    /// Create a successful result from the extracted page
    pub fn success(url: String, page: ParsedPage) -> Self {
        Self {
            url: Some(url),
            status: Status::Success,
            metadata: Some(page.metadata),
            content: Some(page.content),
            navigation: Some(page.navigation),
            error: None,
            scraped_at: unix_timestamp(),
        }
    }

    /// Create an error result for the given URL
    pub fn failure(url: impl Into<String>, error: impl ToString) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::bare_failure(error)
        }
    }

    /// Create an error result that carries no URL
    pub fn bare_failure(error: impl ToString) -> Self {
        Self {
            url: None,
            status: Status::Error,
            metadata: None,
            content: None,
            navigation: None,
            error: Some(error.to_string()),
            scraped_at: unix_timestamp(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }
}

/// Page-level descriptive fields, empty strings when absent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub twitter_title: String,
    pub twitter_description: String,
    /// Absolute URL of the page icon
    pub favicon: String,
    pub domain: String,
}

/// Visible content of the page body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    /// All h1s, then all h2s, and so on
    pub headings: Vec<Heading>,
    pub paragraphs: Vec<String>,
    /// Anchors with their href exactly as written in the markup
    pub links: Vec<Link>,
    pub images: Vec<Image>,
    /// Whitespace-collapsed main text
    pub text_content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Link found inside a nav/menu-like container, href resolved to an absolute URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationItem {
    pub text: String,
    pub href: String,
}

/// The three extraction records for one document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    pub metadata: Metadata,
    pub content: Content,
    pub navigation: Vec<NavigationItem>,
}
