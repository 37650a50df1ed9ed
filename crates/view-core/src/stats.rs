//! Summary numbers and filter facets for a record collection.

use crate::format::parse_date_value;
use crate::record::{FIELD_DATE, FIELD_RECIPIENT, FIELD_SENDER, Record, Searchable};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashSet};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultStats {
    pub total: usize,
    /// Distinct non-null `sender` values
    pub unique_senders: usize,
    /// Distinct non-null `recipient` values
    pub unique_recipients: usize,
    /// Earliest and latest parseable `date`
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl ResultStats {
    pub fn compute<'a>(records: impl IntoIterator<Item = &'a Record>) -> Self {
        let mut total = 0;
        let mut senders = HashSet::new();
        let mut recipients = HashSet::new();
        let mut date_range: Option<(NaiveDate, NaiveDate)> = None;

        for record in records {
            total += 1;
            if let Some(sender) = record.str_field(FIELD_SENDER) {
                senders.insert(sender);
            }
            if let Some(recipient) = record.str_field(FIELD_RECIPIENT) {
                recipients.insert(recipient);
            }
            if let Some(date) = record.get(FIELD_DATE).and_then(parse_date_value) {
                date_range = Some(match date_range {
                    Some((min, max)) => (min.min(date), max.max(date)),
                    None => (date, date),
                });
            }
        }

        Self {
            total,
            unique_senders: senders.len(),
            unique_recipients: recipients.len(),
            date_range,
        }
    }
}

/// Distinct categories and subcategories, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Facets {
    pub categories: Vec<String>,
    pub subcategories: Vec<String>,
}

impl Facets {
    pub fn collect<'a, T: Searchable + 'a>(records: impl IntoIterator<Item = &'a T>) -> Self {
        let mut categories = BTreeSet::new();
        let mut subcategories = BTreeSet::new();
        for record in records {
            if let Some(category) = record.category().filter(|c| !c.is_empty()) {
                categories.insert(category.to_owned());
            }
            if let Some(subcategory) = record.subcategory().filter(|c| !c.is_empty()) {
                subcategories.insert(subcategory.to_owned());
            }
        }
        Self {
            categories: categories.into_iter().collect(),
            subcategories: subcategories.into_iter().collect(),
        }
    }
}
