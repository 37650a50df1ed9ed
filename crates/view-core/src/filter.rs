//! Client-side filtering of a record collection.
//!
//! A record is kept when it passes the category, the subcategory and the
//! text predicate. The text predicate lowercases filename, body text and
//! summary into one haystack and requires every query term to be a
//! substring of it. Filtering is stable: kept records stay in input order.

use crate::record::Searchable;
use query::Terms;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub query: String,
}

impl FilterState {
    /// True when at least one predicate can reject a record
    pub fn is_active(&self) -> bool {
        self.category.is_some() || self.subcategory.is_some() || !self.query.trim().is_empty()
    }

    fn passes_facets<T: Searchable>(&self, record: &T) -> bool {
        facet_matches(self.category.as_deref(), record.category())
            && facet_matches(self.subcategory.as_deref(), record.subcategory())
    }
}

fn facet_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    wanted.map_or(true, |wanted| actual == Some(wanted))
}

/// Records passing `state`, in input order.
pub fn filter<'a, T: Searchable>(records: &'a [T], state: &FilterState) -> Vec<&'a T> {
    let terms = Terms::parse(&state.query);
    let kept: Vec<&T> = records
        .iter()
        .filter(|record| {
            state.passes_facets(*record)
                && (terms.is_empty()
                    || terms.all_within(&record.searchable_text().to_lowercase()))
        })
        .collect();
    tracing::debug!("filter kept {} of {} records", kept.len(), records.len());
    kept
}

/// Lowercase haystacks computed once for a collection.
///
/// Gives the same results as [`filter`] while skipping the per-pass
/// haystack construction, for shells that re-filter on every keystroke.
#[derive(Debug, Clone)]
pub struct FilterIndex<'a, T> {
    records: &'a [T],
    haystacks: Vec<String>,
}

impl<'a, T: Searchable> FilterIndex<'a, T> {
    pub fn build(records: &'a [T]) -> Self {
        let haystacks = records
            .iter()
            .map(|record| record.searchable_text().to_lowercase())
            .collect();
        Self { records, haystacks }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn filter(&self, state: &FilterState) -> Vec<&'a T> {
        let terms = Terms::parse(&state.query);
        self.records
            .iter()
            .zip(&self.haystacks)
            .filter(|(record, haystack)| {
                state.passes_facets(*record) && terms.all_within(haystack)
            })
            .map(|(record, _)| record)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use rstest::rstest;
    use serde_json::json;

    fn records() -> Vec<Record> {
        [
            json!({"md5": "aa", "filename": "a.txt", "category": "Legal", "subcategory": "Contracts", "text": "Signed lease agreement"}),
            json!({"md5": "bb", "filename": "b.txt", "category": "Finance", "subcategory": "Contracts", "summary": "Q3 budget"}),
            json!({"md5": "cc", "filename": "c.pdf", "category": "Legal", "subcategory": "Litigation", "text": "Deposition BUDGET notes"}),
            json!({"md5": "dd", "filename": "d.eml"}),
        ]
        .into_iter()
        .map(|v| Record::try_from(v).unwrap())
        .collect()
    }

    fn state(category: Option<&str>, subcategory: Option<&str>, query: &str) -> FilterState {
        FilterState {
            category: category.map(str::to_owned),
            subcategory: subcategory.map(str::to_owned),
            query: query.to_owned(),
        }
    }

    fn hashes(kept: &[&Record]) -> Vec<String> {
        kept.iter().map(|r| r.hash().to_owned()).collect()
    }

    #[test]
    fn test_category_example() {
        let records = vec![
            Record::try_from(json!({"filename": "a.txt", "category": "Legal", "md5": "aa"})).unwrap(),
            Record::try_from(json!({"filename": "b.txt", "category": "Finance", "md5": "bb"})).unwrap(),
        ];
        let kept = filter(&records, &state(Some("Legal"), None, ""));
        assert_eq!(kept, vec![&records[0]]);
    }

    #[rstest]
    #[case(state(None, None, ""), vec!["aa", "bb", "cc", "dd"])]
    #[case(state(Some("Legal"), None, ""), vec!["aa", "cc"])]
    #[case(state(Some("legal"), None, ""), vec![])]
    #[case(state(None, Some("Contracts"), ""), vec!["aa", "bb"])]
    #[case(state(Some("Legal"), Some("Contracts"), ""), vec!["aa"])]
    #[case(state(None, None, "budget"), vec!["bb", "cc"])]
    #[case(state(None, None, "  BUDGET   notes "), vec!["cc"])]
    #[case(state(None, None, "budget lease"), vec![])]
    #[case(state(None, None, ".txt"), vec!["aa", "bb"])]
    #[case(state(Some("Finance"), None, "budget"), vec!["bb"])]
    #[case(state(None, None, "   "), vec!["aa", "bb", "cc", "dd"])]
    fn test_filter(#[case] state: FilterState, #[case] expected: Vec<&str>) {
        let records = records();
        assert_eq!(hashes(&filter(&records, &state)), expected);
    }

    #[rstest]
    #[case("12345", vec!["aa"])]
    #[case("true", vec!["bb"])]
    #[case("memo 2.5", vec!["cc"])]
    #[case("null", vec![])]
    fn test_filter_matches_non_string_fields(#[case] query: &str, #[case] expected: Vec<&str>) {
        let records: Vec<Record> = [
            json!({"md5": "aa", "filename": 12345, "text": "memo"}),
            json!({"md5": "bb", "filename": "b.txt", "summary": true}),
            json!({"md5": "cc", "filename": null, "text": "memo", "summary": 2.5}),
        ]
        .into_iter()
        .map(|v| Record::try_from(v).unwrap())
        .collect();
        let kept = filter(&records, &state(None, None, query));
        assert_eq!(hashes(&kept), expected);
        assert_eq!(FilterIndex::build(&records).filter(&state(None, None, query)), kept);
    }

    #[test]
    fn test_missing_category_fails_set_filter() {
        let records = records();
        let kept = filter(&records, &state(Some("Legal"), None, "d.eml"));
        assert!(kept.is_empty());
    }

    #[test]
    fn test_filter_is_conjunctive() {
        let records = records();
        let by_category = filter(&records, &state(Some("Legal"), None, ""));
        let by_subcategory = filter(&records, &state(None, Some("Contracts"), ""));
        let intersection: Vec<&Record> = by_category
            .iter()
            .copied()
            .filter(|r| by_subcategory.iter().any(|s| std::ptr::eq(*s, *r)))
            .collect();
        assert_eq!(intersection, filter(&records, &state(Some("Legal"), Some("Contracts"), "")));
    }

    #[test]
    fn test_filter_is_order_preserving_subsequence() {
        let records = records();
        let kept = filter(&records, &state(None, None, "t"));
        let positions: Vec<usize> = kept
            .iter()
            .map(|k| records.iter().position(|r| std::ptr::eq(r, *k)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[rstest]
    #[case(state(None, None, ""))]
    #[case(state(Some("Legal"), None, "notes"))]
    #[case(state(None, Some("Contracts"), "a.TXT"))]
    #[case(state(None, None, "budget"))]
    fn test_index_matches_plain_filter(#[case] state: FilterState) {
        let records = records();
        let index = FilterIndex::build(&records);
        assert_eq!(index.len(), records.len());
        assert_eq!(index.filter(&state), filter(&records, &state));
    }

    #[rstest]
    #[case(state(None, None, ""), false)]
    #[case(state(None, None, "  "), false)]
    #[case(state(Some("Legal"), None, ""), true)]
    #[case(state(None, Some("x"), ""), true)]
    #[case(state(None, None, "x"), true)]
    fn test_is_active(#[case] state: FilterState, #[case] expected: bool) {
        assert_eq!(state.is_active(), expected);
    }
}
