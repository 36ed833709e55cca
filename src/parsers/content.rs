use crate::config::ScraperConfig;
use crate::parsers::text::{
    char_len, collapse_whitespace, element_text, stripped_text, truncate_chars,
};
use crate::results::{Content, Heading, Image, Link};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

/// Elements whose subtrees never count as page content
const REMOVED_TAGS: &str = "script, style, nav, footer, header";

/// Class pattern of a container holding the main text
const MAIN_CLASS_PATTERN: &str = "content|main";

/// Detaches script, style, nav, footer and header subtrees from the document
///
/// Detached nodes stay in the tree's arena, so callers must walk the document
/// from `root_element()` rather than with `Html::select`.
pub fn prune(doc: &mut Html) {
    let selector = Selector::parse(REMOVED_TAGS).unwrap();
    let ids = doc
        .root_element()
        .select(&selector)
        .map(|e| e.id())
        .collect::<Vec<_>>();

    ::log::debug!("Removing {} non-content subtrees", ids.len());

    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Extracts headings, paragraphs, links, images and main text from a pruned document
pub fn parse(doc: &Html, config: &ScraperConfig) -> Content {
    let root = doc.root_element();

    let content = Content {
        headings: extract_headings(root),
        paragraphs: extract_paragraphs(root, config.min_paragraph_chars),
        links: extract_links(root),
        images: extract_images(root),
        text_content: extract_main_text(root, config.max_text_chars),
    };

    ::log::debug!(
        "Content: {} headings, {} paragraphs, {} links, {} images, {} chars of text",
        content.headings.len(),
        content.paragraphs.len(),
        content.links.len(),
        content.images.len(),
        char_len(&content.text_content)
    );

    content
}

/// All h1s, then all h2s, down to h6
fn extract_headings(root: ElementRef<'_>) -> Vec<Heading> {
    let mut headings = Vec::new();

    for level in 1..=6u8 {
        let selector = Selector::parse(&format!("h{}", level)).unwrap();
        headings.extend(
            root.select(&selector)
                .map(element_text)
                .filter(|text| !text.is_empty())
                .map(|text| Heading { level, text }),
        );
    }

    headings
}

fn extract_paragraphs(root: ElementRef<'_>, min_chars: usize) -> Vec<String> {
    let selector = Selector::parse("p").unwrap();
    root.select(&selector)
        .map(element_text)
        .filter(|text| char_len(text) > min_chars)
        .collect()
}

/// Anchors with text and an href, the href kept as written
fn extract_links(root: ElementRef<'_>) -> Vec<Link> {
    anchors(root)
        .into_iter()
        .map(|(text, href)| Link {
            text,
            href: href.to_string(),
        })
        .collect()
}

fn extract_images(root: ElementRef<'_>) -> Vec<Image> {
    let selector = Selector::parse("img[src]").unwrap();
    root.select(&selector)
        .filter_map(|img| {
            let attrs = img.value();
            let src = attrs.attr("src").filter(|s| !s.is_empty())?;
            Some(Image {
                src: src.to_string(),
                alt: attrs.attr("alt").unwrap_or_default().to_string(),
            })
        })
        .collect()
}

/// Whitespace-collapsed text of the main container, or of the whole document
fn extract_main_text(root: ElementRef<'_>, max_chars: usize) -> String {
    let container = find_main_container(root);
    let text = match container {
        Some(element) => stripped_text(element),
        None => {
            ::log::debug!("No main container found, using whole document text");
            stripped_text(root)
        }
    };

    truncate_chars(&collapse_whitespace(&text), max_chars)
}

/// First `<main>`, else first `<article>`, else first content/main classed `<div>`
fn find_main_container(root: ElementRef<'_>) -> Option<ElementRef<'_>> {
    let first = |css: &str| {
        let selector = Selector::parse(css).unwrap();
        root.select(&selector).next()
    };

    first("main")
        .or_else(|| first("article"))
        .or_else(|| {
            let class_re = Regex::new(MAIN_CLASS_PATTERN).unwrap();
            let selector = Selector::parse("div[class]").unwrap();
            root.select(&selector).find(|div| {
                div.value()
                    .attr("class")
                    .is_some_and(|class| class_re.is_match(class))
            })
        })
}

/// `(trimmed text, href)` for every anchor that has both, in document order
pub(crate) fn anchors<'a>(scope: ElementRef<'a>) -> Vec<(String, &'a str)> {
    let selector = Selector::parse("a[href]").unwrap();
    scope
        .select(&selector)
        .filter_map(|a| {
            let href = a.value().attr("href").filter(|h| !h.is_empty())?;
            let text = element_text(a);
            (!text.is_empty()).then_some((text, href))
        })
        .collect()
}
