//! Records as returned by the search and document listing endpoints.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::borrow::Cow;
use thiserror::Error;

pub const FIELD_HASH: &str = "md5";
pub const FIELD_FILENAME: &str = "filename";
pub const FIELD_TEXT: &str = "text";
pub const FIELD_SUMMARY: &str = "summary";
pub const FIELD_CATEGORY: &str = "category";
pub const FIELD_SUBCATEGORY: &str = "subcategory";
pub const FIELD_DATE: &str = "date";
pub const FIELD_SENDER: &str = "sender";
pub const FIELD_RECIPIENT: &str = "recipient";

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("record has no `md5` content hash")]
    MissingHash,
    #[error("entry {index} is not a JSON object")]
    NotAnObject { index: usize },
    #[error("expected an array of records or a `results`/`documents` envelope")]
    UnexpectedShape,
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Fields that drive client-side filtering.
///
/// Result lists and document lists filter the same way; anything that can
/// project these three values can be filtered.
pub trait Searchable {
    /// Filename, body text and summary joined by single spaces. Missing
    /// fields contribute an empty string.
    fn searchable_text(&self) -> String;
    fn category(&self) -> Option<&str>;
    fn subcategory(&self) -> Option<&str>;
}

/// One search result or document entry.
///
/// Fields keep the order the server sent them in. The content hash is the
/// only field that is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    hash: String,
    fields: Map<String, Value>,
}

impl Record {
    /// Content-hash identifier, the bookmark key
    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// String value of a field. `null` and non-string values are absent.
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(Value::as_str)
    }

    /// Field names in their original order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn filename(&self) -> Option<&str> {
        self.str_field(FIELD_FILENAME)
    }

    pub fn text(&self) -> Option<&str> {
        self.str_field(FIELD_TEXT)
    }

    pub fn summary(&self) -> Option<&str> {
        self.str_field(FIELD_SUMMARY)
    }

    pub fn date(&self) -> Option<&str> {
        self.str_field(FIELD_DATE)
    }

    /// Text form of a field: strings as-is, other values as compact JSON,
    /// `null` and absent as empty.
    pub fn text_of(&self, name: &str) -> Cow<'_, str> {
        match self.fields.get(name) {
            None | Some(Value::Null) => Cow::Borrowed(""),
            Some(Value::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }
}

impl Searchable for Record {
    fn searchable_text(&self) -> String {
        [FIELD_FILENAME, FIELD_TEXT, FIELD_SUMMARY]
            .map(|name| self.text_of(name))
            .join(" ")
    }

    fn category(&self) -> Option<&str> {
        self.str_field(FIELD_CATEGORY)
    }

    fn subcategory(&self) -> Option<&str> {
        self.str_field(FIELD_SUBCATEGORY)
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let hash = fields
            .get(FIELD_HASH)
            .and_then(Value::as_str)
            .ok_or(RecordError::MissingHash)?
            .to_owned();
        Ok(Self { hash, fields })
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Self::try_from(fields),
            _ => Err(RecordError::NotAnObject { index: 0 }),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = Map::deserialize(deserializer)?;
        Self::try_from(fields).map_err(serde::de::Error::custom)
    }
}

/// Parse a record collection.
///
/// Accepts a bare JSON array or the `{"results": [...]}` and
/// `{"documents": [...]}` envelopes. Entries without a content hash are
/// skipped with a warning; entries that are not objects are an error.
pub fn load_records(json: &str) -> Result<Vec<Record>, RecordError> {
    let value: Value = serde_json::from_str(json)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut envelope) => match envelope
            .remove("results")
            .or_else(|| envelope.remove("documents"))
        {
            Some(Value::Array(entries)) => entries,
            _ => return Err(RecordError::UnexpectedShape),
        },
        _ => return Err(RecordError::UnexpectedShape),
    };

    let mut records = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let Value::Object(fields) = entry else {
            return Err(RecordError::NotAnObject { index });
        };
        match Record::try_from(fields) {
            Ok(record) => records.push(record),
            Err(e) => tracing::warn!("skipping entry {}: {}", index, e),
        }
    }
    tracing::debug!("loaded {} records", records.len());
    Ok(records)
}
