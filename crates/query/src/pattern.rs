use crate::Terms;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    /// The escaped alternation was still rejected, e.g. it exceeds the
    /// compiled size limit for very long queries.
    #[error("query terms could not be compiled: {0}")]
    Compile(#[from] regex::Error),
}

/// Case-insensitive alternation over literal query terms.
///
/// Every term is escaped, so user input such as `a.b` or `(x` matches
/// literally. Alternatives are tried in query order at each position
/// (leftmost-first), which decides the winner when terms overlap.
#[derive(Debug, Clone)]
pub struct TermPattern {
    regex: Regex,
}

impl TermPattern {
    /// Returns `Ok(None)` when there are no terms to match.
    pub fn build(terms: &Terms) -> Result<Option<Self>, PatternError> {
        if terms.is_empty() {
            return Ok(None);
        }
        let alternation = terms
            .iter()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&alternation)
            .case_insensitive(true)
            .build()?;
        Ok(Some(Self { regex }))
    }

    /// Split `text` around the matches, keeping the matches.
    ///
    /// Yields `(piece, matched)` pairs whose concatenation is `text`. Empty
    /// pieces are never produced.
    pub fn split_inclusive<'t>(&self, text: &'t str) -> Vec<(&'t str, bool)> {
        let mut pieces = Vec::new();
        let mut last_end = 0;
        for m in self.regex.find_iter(text) {
            if m.start() > last_end {
                pieces.push((&text[last_end..m.start()], false));
            }
            if !m.as_str().is_empty() {
                pieces.push((m.as_str(), true));
            }
            last_end = m.end();
        }
        if last_end < text.len() {
            pieces.push((&text[last_end..], false));
        }
        pieces
    }
}
