//! Mark query terms inside plain text.
//!
//! The text is split around a case-insensitive alternation of the escaped
//! terms, keeping the matched pieces. A piece is flagged only when its
//! lowercase form equals a lowercase term, so a piece the alternation
//! captured with different case folding is left unflagged. URL segments are
//! never highlighted; callers pass plain segments only.

use query::{TermPattern, Terms};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Run<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self { text, is_match: false }
    }
}

/// A query compiled once and applied to many text segments.
#[derive(Debug, Clone)]
pub struct Highlighter {
    terms: Terms,
    pattern: Option<TermPattern>,
}

impl Highlighter {
    pub fn new(query: &str) -> Self {
        let terms = Terms::parse(query);
        let pattern = TermPattern::build(&terms).unwrap_or_else(|e| {
            tracing::warn!("highlighting disabled for query '{}': {}", query, e);
            None
        });
        Self { terms, pattern }
    }

    /// Whether any run can ever be flagged
    pub fn is_active(&self) -> bool {
        self.pattern.is_some()
    }

    /// Runs covering `text` in order. Without terms this is one unflagged
    /// run equal to `text`.
    pub fn highlight<'t>(&self, text: &'t str) -> Vec<Run<'t>> {
        let Some(pattern) = &self.pattern else {
            return vec![Run::plain(text)];
        };
        pattern
            .split_inclusive(text)
            .into_iter()
            .map(|(piece, _)| Run {
                text: piece,
                is_match: self.terms.matches_exactly(piece),
            })
            .collect()
    }
}

pub fn highlight<'t>(text: &'t str, query: &str) -> Vec<Run<'t>> {
    Highlighter::new(query).highlight(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn flagged<'t>(runs: &[Run<'t>]) -> Vec<&'t str> {
        runs.iter().filter(|r| r.is_match).map(|r| r.text).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t\n")]
    fn test_empty_query_single_run(#[case] query: &str) {
        let text = "Quarterly budget memo";
        assert_eq!(highlight(text, query), vec![Run::plain(text)]);
    }

    #[test]
    fn test_empty_query_empty_text() {
        assert_eq!(highlight("", ""), vec![Run::plain("")]);
    }

    #[test]
    fn test_terms_flagged_case_insensitively() {
        let runs = highlight("The Budget memo and BUDGET", "budget memo");
        assert_eq!(
            runs,
            vec![
                Run::plain("The "),
                Run { text: "Budget", is_match: true },
                Run::plain(" "),
                Run { text: "memo", is_match: true },
                Run::plain(" and "),
                Run { text: "BUDGET", is_match: true },
            ]
        );
    }

    #[test]
    fn test_runs_reconstruct_text() {
        let text = "memo, Memo; memorandum";
        let joined: String = highlight(text, "memo").iter().map(|r| r.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_term_inside_word_is_flagged() {
        // The split captures exactly the term, so equality holds.
        let runs = highlight("memorandum", "memo");
        assert_eq!(flagged(&runs), vec!["memo"]);
    }

    #[rstest]
    #[case("a.b", "x a.b axb", vec!["a.b"])]
    #[case("c++ (draft", "c++ and (draft)", vec!["c++", "(draft"])]
    #[case("[1]", "see [1] and 1", vec!["[1]"])]
    #[case("\\d+", "\\d+ 42", vec!["\\d+"])]
    fn test_metacharacters_never_fail(
        #[case] query: &str,
        #[case] text: &str,
        #[case] expected: Vec<&str>,
    ) {
        assert_eq!(flagged(&highlight(text, query)), expected);
    }

    #[test]
    fn test_prefix_terms_first_alternative_wins() {
        let runs = highlight("budgets", "bud budget");
        assert_eq!(runs, vec![Run { text: "bud", is_match: true }, Run::plain("gets")]);
    }

    #[test]
    fn test_no_match_is_single_plain_run() {
        assert_eq!(highlight("nothing here", "zebra"), vec![Run::plain("nothing here")]);
    }

    #[test]
    fn test_highlighter_reused_across_segments() {
        let highlighter = Highlighter::new("memo");
        assert!(highlighter.is_active());
        assert_eq!(flagged(&highlighter.highlight("a memo")), vec!["memo"]);
        assert_eq!(flagged(&highlighter.highlight("MEMO b")), vec!["MEMO"]);
        assert!(!Highlighter::new(" ").is_active());
    }
}
