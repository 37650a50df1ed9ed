/// A query split into whitespace-separated terms.
///
/// An empty or whitespace-only query has no terms and means "no filter".
/// Terms keep their original spelling for pattern building and a lowercase
/// form for case-insensitive comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Terms {
    raw: Vec<String>,
    folded: Vec<String>,
}

impl Terms {
    pub fn parse(query: &str) -> Self {
        let raw: Vec<String> = query.split_whitespace().map(str::to_owned).collect();
        let folded = raw.iter().map(|t| t.to_lowercase()).collect();
        Self { raw, folded }
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Terms as typed, in query order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.raw.iter().map(String::as_str)
    }

    /// Lowercase terms, in query order
    pub fn folded(&self) -> impl Iterator<Item = &str> {
        self.folded.iter().map(String::as_str)
    }

    /// True when the lowercase form of `run` equals the lowercase form of
    /// some term. This is equality, not containment.
    pub fn matches_exactly(&self, run: &str) -> bool {
        if self.folded.is_empty() {
            return false;
        }
        let run = run.to_lowercase();
        self.folded.iter().any(|term| *term == run)
    }

    /// True when every term occurs in `haystack`, which must already be lowercase.
    /// Vacuously true without terms.
    pub fn all_within(&self, lowercase_haystack: &str) -> bool {
        self.folded
            .iter()
            .all(|term| lowercase_haystack.contains(term.as_str()))
    }
}
