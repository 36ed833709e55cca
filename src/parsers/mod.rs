pub mod content;
pub mod metadata;
pub mod navigation;
pub mod text;

#[cfg(test)]
mod tests;

use crate::config::ScraperConfig;
use crate::results::ParsedPage;
use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, HtmlTreeSink};
use url::Url;

/// Runs the metadata, content and navigation parsers over one HTML document
///
/// Metadata is read from the document as fetched. Content and navigation are
/// read after script, style, nav, footer and header subtrees are removed.
pub fn parse_page(html: &str, url: &Url, config: &ScraperConfig) -> ParsedPage {
    let mut doc = parse_document(html);

    if !doc.errors.is_empty() {
        ::log::debug!("HTML parser reported {} recoverable errors", doc.errors.len());
    }

    let metadata = metadata::parse(&doc, url);

    content::prune(&mut doc);
    let content = content::parse(&doc, config);
    let navigation = navigation::parse(&doc, url, config.max_navigation_items);

    ParsedPage {
        metadata,
        content,
        navigation,
    }
}

/// Parses a document with scripting disabled
///
/// `<noscript>` content is then built as ordinary markup, so its text and
/// images are extracted like any other element instead of a raw text blob.
pub fn parse_document(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html)
}
