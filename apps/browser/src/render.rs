//! Plain-text rendering of view models for the terminal.

use crate::config::DisplayConfig;
use view_core::{DisplayStrings, Fragment, PageView, RowView};

pub fn fragments(fragments: &[Fragment<'_>], display: &DisplayConfig) -> String {
    let mut out = String::new();
    for fragment in fragments {
        match fragment {
            Fragment::Text(runs) => {
                for run in runs {
                    if run.is_match {
                        out.push_str(&display.highlight_open);
                        out.push_str(run.text);
                        out.push_str(&display.highlight_close);
                    } else {
                        out.push_str(run.text);
                    }
                }
            }
            Fragment::Link { target, label } => {
                out.push_str(label);
                out.push('(');
                out.push_str(target);
                out.push(')');
            }
        }
    }
    out
}

pub fn row(row: &RowView<'_>, display: &DisplayConfig, strings: &DisplayStrings) -> String {
    let bookmark = if row.bookmarked { "*" } else { " " };
    let filename = row.filename.unwrap_or(&strings.not_available);
    let facet = match (row.category, row.subcategory) {
        (Some(category), Some(subcategory)) => format!("{category} / {subcategory}"),
        (Some(category), None) => category.to_string(),
        (None, Some(subcategory)) => subcategory.to_string(),
        (None, None) => strings.not_available.clone(),
    };
    let mut out = format!("{bookmark} {filename}  {}  {facet}  [{}]", row.date, row.hash);
    let body = fragments(&row.body, display);
    for line in body.lines().filter(|line| !line.trim().is_empty()) {
        out.push_str("\n    ");
        out.push_str(line.trim_end());
    }
    out
}

pub fn page(view: &PageView<'_>, display: &DisplayConfig, strings: &DisplayStrings) -> String {
    if view.rows.is_empty() {
        return if view.total_count == 0 {
            strings.no_documents.clone()
        } else {
            strings.no_results.clone()
        };
    }

    let mut out = if view.is_filtered {
        format!(
            "Page {}/{} ({} of {} records)",
            view.page, view.total_pages, view.filtered_count, view.total_count
        )
    } else {
        format!("Page {}/{} ({} records)", view.page, view.total_pages, view.total_count)
    };
    for item in &view.rows {
        out.push_str("\n\n");
        out.push_str(&row(item, display, strings));
    }
    out
}
