use crate::parsers::content::anchors;
use crate::results::NavigationItem;
use crate::utils::resolve_href;
use regex::Regex;
use scraper::{Html, Selector};
use url::Url;

/// Class pattern of a navigation-like container
const NAV_CLASS_PATTERN: &str = "nav|menu|header";

/// Collects links from nav elements and nav/menu/header classed divs
///
/// Containers are visited in document order and each contributes all of its
/// links, so links inside nested containers appear once per container.
pub fn parse(doc: &Html, base_url: &Url, max_items: usize) -> Vec<NavigationItem> {
    let class_re = Regex::new(NAV_CLASS_PATTERN).unwrap();
    let container_selector = Selector::parse("nav, div").unwrap();

    let containers = doc.root_element().select(&container_selector).filter(|e| {
        e.value().name() == "nav"
            || e
                .value()
                .attr("class")
                .is_some_and(|class| class_re.is_match(class))
    });

    let navigation = containers
        .flat_map(anchors)
        .map(|(text, href)| NavigationItem {
            text,
            href: resolve_href(base_url, href),
        })
        .take(max_items)
        .collect::<Vec<_>>();

    ::log::debug!("Navigation: {} items", navigation.len());

    navigation
}
