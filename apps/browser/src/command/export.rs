use super::{Command, load_file};
use crate::cli::FilterArgs;
use crate::config::Config;
use crate::error::{Result, WrapErr, error};
use std::path::{Path, PathBuf};
use view_core::{BookmarkStore, Export, ExportKind, Record, export, filter};

pub struct ExportCommand {
    config: Config,
    file: PathBuf,
    filter: FilterArgs,
    bookmarks: Vec<String>,
}

impl ExportCommand {
    pub fn new(config: Config, file: PathBuf, filter: FilterArgs, bookmarks: Vec<String>) -> Self {
        Self {
            config,
            file,
            filter,
            bookmarks,
        }
    }

    /// Toggle each hash in argument order, so a hash given twice cancels out.
    fn bookmark_store(records: &[Record], hashes: &[String]) -> Result<BookmarkStore> {
        let mut store = BookmarkStore::new();
        for hash in hashes {
            let record = records
                .iter()
                .find(|record| record.hash() == hash)
                .ok_or_else(|| error!("No record with hash {}", hash))?;
            store.toggle(record.clone());
        }
        Ok(store)
    }

    fn build(&self, records: &[Record]) -> Result<Option<Export>> {
        if self.bookmarks.is_empty() {
            let filtered = filter(records, &self.filter.to_state());
            Ok(export(ExportKind::Results, filtered.iter().copied()))
        } else {
            let store = Self::bookmark_store(records, &self.bookmarks)?;
            Ok(export(ExportKind::Bookmarks, &store))
        }
    }
}

pub async fn write_export(exported: &Export, dir: &Path) -> Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Cannot create export directory {}", dir.display()))?;
    let path = dir.join(&exported.file_name);
    tokio::fs::write(&path, exported.body.as_bytes())
        .await
        .with_context(|| format!("Cannot write {}", path.display()))?;
    tracing::info!(
        "wrote {} export ({}) to {}",
        exported.kind,
        exported.content_type,
        path.display()
    );
    Ok(path)
}

#[async_trait::async_trait]
impl Command for ExportCommand {
    async fn execute(&self) -> Result<()> {
        let records = load_file(&self.file).await?;
        let Some(exported) = self.build(&records)? else {
            let strings = &self.config.strings;
            let message = if self.bookmarks.is_empty() {
                &strings.no_results
            } else {
                &strings.no_bookmarks
            };
            println!("{message}");
            return Ok(());
        };
        let path = write_export(&exported, &self.config.export_dir).await?;
        println!("{}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            Record::try_from(json!({"md5": "aa", "filename": "a.txt", "category": "Legal"})).unwrap(),
            Record::try_from(json!({"md5": "bb", "filename": "b.txt", "category": "Finance"})).unwrap(),
            Record::try_from(json!({"md5": "cc", "filename": "c, d.txt", "category": "Legal"})).unwrap(),
        ]
    }

    fn command(filter: FilterArgs, bookmarks: &[&str]) -> ExportCommand {
        ExportCommand::new(
            Config::default(),
            PathBuf::from("unused.json"),
            filter,
            bookmarks.iter().map(|h| h.to_string()).collect(),
        )
    }

    #[test]
    fn test_build_filtered_results() {
        let filter = FilterArgs {
            category: Some("Legal".to_string()),
            ..Default::default()
        };
        let exported = command(filter, &[]).build(&records()).unwrap().unwrap();
        assert_eq!(exported.kind, ExportKind::Results);
        assert!(exported.file_name.starts_with("email_search_"));
        assert_eq!(exported.body, "md5,filename,category\naa,a.txt,Legal\ncc,\"c, d.txt\",Legal");
    }

    #[test]
    fn test_build_bookmarks_in_argument_order() {
        let exported = command(FilterArgs::default(), &["cc", "aa", "bb", "bb"])
            .build(&records())
            .unwrap()
            .unwrap();
        assert_eq!(exported.kind, ExportKind::Bookmarks);
        assert!(exported.file_name.starts_with("bookmarked_documents_"));
        assert_eq!(exported.body, "md5,filename,category\ncc,\"c, d.txt\",Legal\naa,a.txt,Legal");
    }

    #[test]
    fn test_build_nothing_to_export() {
        let filter = FilterArgs {
            query: "absent".to_string(),
            ..Default::default()
        };
        assert!(command(filter, &[]).build(&records()).unwrap().is_none());
        assert!(command(FilterArgs::default(), &["aa", "aa"]).build(&records()).unwrap().is_none());
    }

    #[test]
    fn test_build_unknown_bookmark() {
        let err = command(FilterArgs::default(), &["zz"]).build(&records()).unwrap_err();
        assert_eq!(err.to_string(), "No record with hash zz");
    }

    #[tokio::test]
    async fn test_write_export_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("exports");
        let exported = export(ExportKind::Results, &records()).unwrap();

        let path = write_export(&exported, &target).await.unwrap();
        assert_eq!(path, target.join(&exported.file_name));
        assert_eq!(std::fs::read_to_string(path).unwrap(), exported.body);
    }
}
