// src/domain/html.rs
//! Regex-level metadata extraction from generated pages. The pages come from
//! our own templates, so a full HTML parser is not needed.

use once_cell::sync::Lazy;
use regex::Regex;

static TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<title>(.*?)</title>").expect("title pattern"));
static HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<h1[^>]*>(.*?)</h1>").expect("h1 pattern"));
static DESCRIPTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"name="description"\s+content="([^"]*)""#).expect("description pattern")
});
static DESCRIPTION_REVERSED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"content="([^"]*)"\s+name="description""#).expect("description pattern")
});
static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));

/// Text of the first `<title>` element, untrimmed.
pub fn title(html: &str) -> Option<&str> {
    TITLE
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Text of the first `<h1>` with inner markup removed and whitespace trimmed.
pub fn first_heading(html: &str) -> Option<String> {
    HEADING
        .captures(html)
        .and_then(|c| c.get(1))
        .map(|m| strip_tags(m.as_str()).trim().to_string())
}

/// Content of the `description` meta tag, whichever attribute comes first.
pub fn meta_description(html: &str) -> Option<&str> {
    DESCRIPTION
        .captures(html)
        .or_else(|| DESCRIPTION_REVERSED.captures(html))
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

pub fn strip_tags(fragment: &str) -> String {
    TAG.replace_all(fragment, "").into_owned()
}

/// Escaping for text interpolated into generated markup.
pub fn escape(text: &str) -> String {
    quick_xml::escape::escape(text).into_owned()
}

/// Decode character references in extracted text. Text with references
/// quick-xml does not know (`&nbsp;`, ...) is returned unchanged.
pub fn decode(text: &str) -> String {
    quick_xml::escape::unescape(text)
        .map_or_else(|_| text.to_string(), |decoded| decoded.into_owned())
}
