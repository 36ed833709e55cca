use crate::parsers::text::element_text;
use crate::results::Metadata;
use crate::utils::{domain_of, resolve_href};
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Extracts title, meta tags, favicon and domain from the document
///
/// Duplicate meta tags are not merged, the last one in the document wins.
pub fn parse(doc: &Html, url: &Url) -> Metadata {
    let mut metadata = Metadata {
        domain: domain_of(url),
        ..Metadata::default()
    };

    let title_selector = Selector::parse("title").unwrap();
    if let Some(title) = doc.select(&title_selector).next() {
        metadata.title = element_text(title);
    }

    let meta_selector = Selector::parse("meta").unwrap();
    for tag in doc.select(&meta_selector) {
        apply_meta_tag(&mut metadata, tag);
    }

    if let Some(href) = find_favicon(doc) {
        metadata.favicon = resolve_href(url, href);
    }

    ::log::debug!(
        "Metadata for {}: title={:?}, favicon={:?}",
        metadata.domain,
        metadata.title,
        metadata.favicon
    );

    metadata
}

/// Copies the tag's `content` into the first field its name/property maps to
fn apply_meta_tag(metadata: &mut Metadata, tag: ElementRef<'_>) {
    let attrs = tag.value();
    let name = attrs.attr("name").unwrap_or_default().to_lowercase();
    let property = attrs.attr("property").unwrap_or_default().to_lowercase();
    let content = attrs.attr("content").unwrap_or_default().to_string();

    let field = match (name.as_str(), property.as_str()) {
        ("description", _) => &mut metadata.description,
        ("keywords", _) => &mut metadata.keywords,
        (_, "og:title") => &mut metadata.og_title,
        (_, "og:description") => &mut metadata.og_description,
        (_, "og:image") => &mut metadata.og_image,
        ("twitter:title", _) => &mut metadata.twitter_title,
        ("twitter:description", _) => &mut metadata.twitter_description,
        _ => return,
    };
    *field = content;
}

/// Href of the first `<link rel="icon">`, then of the first `<link rel="shortcut icon">`
///
/// `rel` values are compared case-sensitively. A link without an href yields
/// an empty string, which resolves to the page itself.
fn find_favicon(doc: &Html) -> Option<&str> {
    let link_selector = Selector::parse("link[rel]").unwrap();
    let links = || doc.select(&link_selector);

    let has_icon_token = |link: &ElementRef<'_>| {
        link.value()
            .attr("rel")
            .is_some_and(|rel| rel.split_ascii_whitespace().any(|t| t == "icon"))
    };
    let is_shortcut_icon = |link: &ElementRef<'_>| {
        link.value()
            .attr("rel")
            .is_some_and(|rel| rel.trim() == "shortcut icon")
    };

    links()
        .find(has_icon_token)
        .or_else(|| links().find(is_shortcut_icon))
        .map(|link| link.value().attr("href").unwrap_or_default())
}
