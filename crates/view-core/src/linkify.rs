//! Split free text into plain and URL segments.

use once_cell::sync::Lazy;
use regex::Regex;

/// `<http(s)://...>` bounded by the closing bracket (whitespace allowed, so a
/// URL folded across lines stays whole), or a bare `http(s)://...` bounded by
/// whitespace or an angle bracket. The wrapped form is tried first.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<https?://[^<>]+>|https?://[^\s<>]+").expect("URL pattern is valid")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSegment<'a> {
    Plain(&'a str),
    /// Raw URL text, including angle brackets when the source had them
    Url(&'a str),
}

impl<'a> TextSegment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            TextSegment::Plain(s) | TextSegment::Url(s) => s,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, TextSegment::Url(_))
    }

    /// Hyperlink target for a URL segment: wrapping brackets dropped and any
    /// whitespace inside removed. `None` for plain text.
    pub fn link_target(&self) -> Option<String> {
        match self {
            TextSegment::Plain(_) => None,
            TextSegment::Url(raw) => {
                let inner = raw.strip_prefix('<').unwrap_or(raw);
                let inner = inner.strip_suffix('>').unwrap_or(inner);
                Some(inner.chars().filter(|c| !c.is_whitespace()).collect())
            }
        }
    }
}

/// Concatenating the returned segments reproduces `text` exactly.
pub fn segment(text: &str) -> Vec<TextSegment<'_>> {
    let mut segments = Vec::new();
    let mut last_end = 0;
    for m in URL_PATTERN.find_iter(text) {
        if m.start() > last_end {
            segments.push(TextSegment::Plain(&text[last_end..m.start()]));
        }
        segments.push(TextSegment::Url(m.as_str()));
        last_end = m.end();
    }
    if last_end < text.len() {
        segments.push(TextSegment::Plain(&text[last_end..]));
    }
    segments
}
