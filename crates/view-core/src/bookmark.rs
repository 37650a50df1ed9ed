//! Session bookmarks keyed by content hash.
//!
//! Insertion order is kept for display and export. Two records with the same
//! hash are the same bookmark. The store is a plain value mutated through
//! `&mut self`; shells sharing it across threads must put it behind a lock.

use crate::record::Record;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct BookmarkStore {
    entries: Vec<Record>,
    keys: HashSet<String>,
}

impl BookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the bookmark with this record's hash, or append the record.
    /// Returns whether the record is bookmarked afterwards.
    pub fn toggle(&mut self, record: Record) -> bool {
        if self.remove(record.hash()).is_some() {
            tracing::debug!("bookmark removed: {}", record.hash());
            false
        } else {
            tracing::debug!("bookmark added: {}", record.hash());
            self.keys.insert(record.hash().to_owned());
            self.entries.push(record);
            true
        }
    }

    /// Upsert: replaces an existing bookmark in place, otherwise appends.
    /// Returns the replaced record.
    pub fn insert(&mut self, record: Record) -> Option<Record> {
        match self.position(record.hash()) {
            Some(idx) => Some(std::mem::replace(&mut self.entries[idx], record)),
            None => {
                self.keys.insert(record.hash().to_owned());
                self.entries.push(record);
                None
            }
        }
    }

    /// No-op when absent.
    pub fn remove(&mut self, hash: &str) -> Option<Record> {
        let idx = self.position(hash)?;
        self.keys.remove(hash);
        Some(self.entries.remove(idx))
    }

    pub fn contains(&self, hash: &str) -> bool {
        self.keys.contains(hash)
    }

    pub fn get(&self, hash: &str) -> Option<&Record> {
        self.position(hash).map(|idx| &self.entries[idx])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Record] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.keys.clear();
    }

    fn position(&self, hash: &str) -> Option<usize> {
        if !self.keys.contains(hash) {
            return None;
        }
        self.entries.iter().position(|r| r.hash() == hash)
    }
}

impl<'a> IntoIterator for &'a BookmarkStore {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(hash: &str) -> Record {
        Record::try_from(json!({"md5": hash, "filename": format!("{hash}.txt")})).unwrap()
    }

    fn hashes(store: &BookmarkStore) -> Vec<&str> {
        store.iter().map(Record::hash).collect()
    }

    #[test]
    fn test_toggle_twice_is_empty() {
        let mut store = BookmarkStore::new();
        assert!(store.toggle(record("aa")));
        assert!(!store.toggle(record("aa")));
        assert!(store.is_empty());
        assert!(!store.contains("aa"));
    }

    #[test]
    fn test_toggle_toggle_remove() {
        let mut store = BookmarkStore::new();
        store.toggle(record("aa"));
        store.toggle(record("bb"));
        assert!(store.remove("aa").is_some());
        assert_eq!(hashes(&store), vec!["bb"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = BookmarkStore::new();
        store.toggle(record("aa"));
        assert!(store.remove("zz").is_none());
        assert_eq!(hashes(&store), vec!["aa"]);
    }

    #[test]
    fn test_readd_moves_to_end() {
        let mut store = BookmarkStore::new();
        for hash in ["aa", "bb", "cc"] {
            store.toggle(record(hash));
        }
        store.toggle(record("aa"));
        store.toggle(record("aa"));
        assert_eq!(hashes(&store), vec!["bb", "cc", "aa"]);
    }

    #[test]
    fn test_colliding_hash_is_same_bookmark() {
        let mut store = BookmarkStore::new();
        store.toggle(record("aa"));
        let other = Record::try_from(json!({"md5": "aa", "filename": "different.txt"})).unwrap();
        assert!(!store.toggle(other));
        assert!(store.is_empty());
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut store = BookmarkStore::new();
        store.toggle(record("aa"));
        store.toggle(record("bb"));
        let newer = Record::try_from(json!({"md5": "aa", "filename": "renamed.txt"})).unwrap();
        let old = store.insert(newer).expect("replaced");
        assert_eq!(old.filename(), Some("aa.txt"));
        assert_eq!(hashes(&store), vec!["aa", "bb"]);
        assert_eq!(store.get("aa").and_then(Record::filename), Some("renamed.txt"));

        assert!(store.insert(record("cc")).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut store = BookmarkStore::new();
        store.toggle(record("aa"));
        store.clear();
        assert!(store.is_empty());
        assert!(!store.contains("aa"));
    }
}
