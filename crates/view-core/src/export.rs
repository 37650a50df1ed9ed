//! CSV export of result lists and bookmarks.
//!
//! The header is the first record's field names in their original order and
//! every row is read through those keys, so fields the first record lacks are
//! dropped and fields later records lack are empty. Values containing a
//! comma, a double quote or a newline are quoted with inner quotes doubled.

use crate::record::Record;
use chrono::{NaiveDate, Utc};
use serde_json::Value;
use std::borrow::Cow;
use strum::Display;

pub const CSV_CONTENT_TYPE: &str = "text/csv;charset=utf-8;";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ExportKind {
    Results,
    Bookmarks,
}

impl ExportKind {
    fn file_stem(&self) -> &'static str {
        match self {
            ExportKind::Results => "email_search",
            ExportKind::Bookmarks => "bookmarked_documents",
        }
    }

    /// e.g. `email_search_2024-03-01.csv`
    pub fn file_name(&self, date: NaiveDate) -> String {
        format!("{}_{}.csv", self.file_stem(), date.format("%Y-%m-%d"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub kind: ExportKind,
    pub file_name: String,
    pub content_type: &'static str,
    pub body: String,
}

/// Serialize `records` as CSV. `None` when there is nothing to export.
pub fn to_csv<'a>(records: impl IntoIterator<Item = &'a Record>) -> Option<String> {
    let mut records = records.into_iter().peekable();
    let columns: Vec<String> = records.peek()?.keys().map(str::to_owned).collect();

    let mut lines = Vec::new();
    lines.push(
        columns
            .iter()
            .map(|c| escape_field(c))
            .collect::<Vec<_>>()
            .join(","),
    );
    for record in records {
        let row = columns
            .iter()
            .map(|column| escape_value(record.get(column)))
            .collect::<Vec<_>>()
            .join(",");
        lines.push(row);
    }
    Some(lines.join("\n"))
}

/// CSV export dated with today's UTC date.
pub fn export<'a>(
    kind: ExportKind,
    records: impl IntoIterator<Item = &'a Record>,
) -> Option<Export> {
    export_dated(kind, records, Utc::now().date_naive())
}

pub fn export_dated<'a>(
    kind: ExportKind,
    records: impl IntoIterator<Item = &'a Record>,
    date: NaiveDate,
) -> Option<Export> {
    let Some(body) = to_csv(records) else {
        tracing::debug!("nothing to export for {}", kind);
        return None;
    };
    Some(Export {
        kind,
        file_name: kind.file_name(date),
        content_type: CSV_CONTENT_TYPE,
        body,
    })
}

/// String form of one value. Absent and `null` are empty, strings are raw,
/// anything else is its compact JSON text.
pub fn escape_value(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) => Cow::Borrowed(""),
        Some(Value::String(s)) => escape_field(s),
        Some(other) => Cow::Owned(escape_field(&other.to_string()).into_owned()),
    }
}

pub fn escape_field(raw: &str) -> Cow<'_, str> {
    if raw.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", raw.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(raw)
    }
}
