use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// Prefix `https://` unless the URL already names an http(s) scheme
pub fn normalize_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("https://{}", url)
    }
}

/// Resolve an href against the page URL the way a browser would
///
/// An href that cannot be joined is returned unchanged.
pub fn resolve_href(base: &Url, href: &str) -> String {
    match base.join(href) {
        Ok(url) => url.to_string(),
        Err(e) => {
            ::log::debug!("Could not resolve href {:?} against {}: {}", href, base, e);
            href.to_string()
        }
    }
}

/// Host of the URL, with the port when one is written explicitly
pub fn domain_of(url: &Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Seconds since the Unix epoch as a float
pub fn unix_timestamp() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default()
}
