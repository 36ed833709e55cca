//! Single-page scraper: fetch one URL and extract its metadata, visible
//! content and navigation links into a JSON-serializable [`ScrapeResult`].
//!
//! ```no_run
//! # async fn demo() {
//! let result = page_scrape::PageExtractor::new().scrape("example.com").await;
//! println!("{}", serde_json::to_string_pretty(&result).unwrap());
//! # }
//! ```

pub mod charset;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fetch;
pub mod input;
pub mod parsers;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use extractor::PageExtractor;
pub use results::{
    Content, Heading, Image, Link, Metadata, NavigationItem, ParsedPage, ScrapeResult, Status,
};
