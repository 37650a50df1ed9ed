use serde::{Deserialize, Serialize};

/// Display strings used while rendering.
///
/// Supplied by the shell (from its locale or configuration) and passed to
/// rendering explicitly. Defaults are English.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct DisplayStrings {
    /// Shown for absent or unparseable dates
    pub not_available: String,
    pub link_label: String,
    pub ellipsis: String,
    pub no_results: String,
    pub no_documents: String,
    pub no_bookmarks: String,
}

impl Default for DisplayStrings {
    fn default() -> Self {
        Self {
            not_available: "N/A".to_string(),
            link_label: "[link]".to_string(),
            ellipsis: "...".to_string(),
            no_results: "No results found. Try different search terms or filters.".to_string(),
            no_documents: "No documents available.".to_string(),
            no_bookmarks: "No bookmarked documents yet.".to_string(),
        }
    }
}
