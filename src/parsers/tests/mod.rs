
use crate::config::ScraperConfig;
use crate::parsers::parse_page;
use crate::results::ParsedPage;
use url::Url;

/// Base URL every fixture is parsed against
const BASE_URL: &str = "https://example.com/docs/";

/// Parse a fixture with the default configuration
fn parse_fixture(html: &str) -> ParsedPage {
    parse_fixture_with(html, &ScraperConfig::default())
}

fn parse_fixture_with(html: &str, config: &ScraperConfig) -> ParsedPage {
    let url = Url::parse(BASE_URL).unwrap();
    parse_page(html, &url, config)
}
