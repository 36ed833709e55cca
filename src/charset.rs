use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use regex::Regex;
use regex::bytes::Regex as BytesRegex;

/// How far into the body a `<meta>` charset declaration is looked for
const PRESCAN_BYTES: usize = 1024;

/// Decodes an HTML body to text
///
/// The encoding comes from, in order: a byte order mark, the `charset`
/// parameter of the Content-Type header, a `<meta>` declaration in the first
/// 1024 bytes, and finally UTF-8. Undecodable bytes become U+FFFD.
pub fn decode_html(body: &[u8], content_type: Option<&str>) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(body) {
        ::log::debug!("Decoding body as {} (byte order mark)", encoding.name());
        let (text, _) = encoding.decode_without_bom_handling(&body[bom_len..]);
        return text.into_owned();
    }

    let encoding = content_type
        .and_then(header_charset)
        .or_else(|| meta_charset(body))
        .unwrap_or(UTF_8);

    ::log::debug!("Decoding body as {}", encoding.name());
    let (text, _, had_errors) = encoding.decode(body);
    if had_errors {
        ::log::debug!("Body contained bytes invalid in {}", encoding.name());
    }
    text.into_owned()
}

/// Encoding named by the `charset` parameter of a Content-Type value
pub fn header_charset(content_type: &str) -> Option<&'static Encoding> {
    let re = Regex::new(r#"(?i)charset\s*=\s*["']?([^"';\s]+)"#).unwrap();
    let label = re.captures(content_type)?.get(1)?.as_str();
    Encoding::for_label(label.as_bytes())
}

/// Encoding declared by `<meta charset>` or `<meta http-equiv content>` near the top of the body
///
/// A declared UTF-16 cannot be right for a document that was readable as
/// ASCII, so it is taken as UTF-8.
pub fn meta_charset(body: &[u8]) -> Option<&'static Encoding> {
    let head = &body[..body.len().min(PRESCAN_BYTES)];
    let re = BytesRegex::new(r#"(?i)<meta[^>]*?charset\s*=\s*["']?\s*([a-z0-9_:.\-]+)"#).unwrap();
    let label = re.captures(head)?.get(1)?.as_bytes();

    match Encoding::for_label(label)? {
        e if e == UTF_16LE || e == UTF_16BE => Some(UTF_8),
        e => Some(e),
    }
}
