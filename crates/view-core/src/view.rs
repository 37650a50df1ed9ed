//! The result view model: filter state, current page and render-ready rows.
//!
//! Every setter that changes a filter input also resets the page to 1, so a
//! page number can never outlive the filtered set it was chosen for.

use crate::bookmark::BookmarkStore;
use crate::filter::{FilterState, filter};
use crate::format::{format_date_value, preview};
use crate::highlight::{Highlighter, Run};
use crate::linkify::{TextSegment, segment};
use crate::paginate::{Navigation, PAGE_SIZE, navigate, paginate, total_pages};
use crate::record::{FIELD_DATE, Record, Searchable};
use crate::strings::DisplayStrings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewLimits {
    pub summary_chars: usize,
    pub body_chars: usize,
}

impl Default for PreviewLimits {
    fn default() -> Self {
        Self {
            summary_chars: 150,
            body_chars: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    /// Plain text split into highlighted and unhighlighted runs
    Text(Vec<Run<'a>>),
    Link { target: String, label: &'a str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub record: &'a Record,
    pub hash: &'a str,
    pub filename: Option<&'a str>,
    pub date: String,
    pub category: Option<&'a str>,
    pub subcategory: Option<&'a str>,
    pub bookmarked: bool,
    pub body: Vec<Fragment<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub rows: Vec<RowView<'a>>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    /// Filters are active and removed at least one record
    pub is_filtered: bool,
}

#[derive(Debug, Clone)]
pub struct ResultView {
    filter: FilterState,
    page: usize,
    page_size: usize,
    show_summaries: bool,
    limits: PreviewLimits,
}

impl Default for ResultView {
    fn default() -> Self {
        Self {
            filter: FilterState::default(),
            page: 1,
            page_size: PAGE_SIZE,
            show_summaries: false,
            limits: PreviewLimits::default(),
        }
    }
}

impl ResultView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self.page = 1;
        self
    }

    pub fn with_limits(mut self, limits: PreviewLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn show_summaries(&self) -> bool {
        self.show_summaries
    }

    pub fn set_show_summaries(&mut self, show: bool) {
        self.show_summaries = show;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if self.filter.query != query {
            self.filter.query = query;
            self.page = 1;
        }
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if self.filter.category != category {
            self.filter.category = category;
            self.page = 1;
        }
    }

    pub fn set_subcategory(&mut self, subcategory: Option<String>) {
        if self.filter.subcategory != subcategory {
            self.filter.subcategory = subcategory;
            self.page = 1;
        }
    }

    pub fn set_filter(&mut self, state: FilterState) {
        if self.filter != state {
            self.filter = state;
            self.page = 1;
        }
    }

    /// Request a page; it is clamped on the next render.
    pub fn go_to(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Move relative to the current page within a collection of `filtered_count` items.
    pub fn navigate(&mut self, nav: Navigation, filtered_count: usize) {
        let total = total_pages(filtered_count, self.page_size);
        self.page = navigate(self.page, total, nav);
    }

    /// Filter, paginate and prepare the visible rows.
    ///
    /// The stored page is clamped to the page actually shown.
    pub fn render<'a>(
        &mut self,
        records: &'a [Record],
        bookmarks: &BookmarkStore,
        strings: &'a DisplayStrings,
    ) -> PageView<'a> {
        let filtered = filter(records, &self.filter);
        let page = paginate(&filtered, self.page, self.page_size);
        self.page = page.page;

        let highlighter = Highlighter::new(&self.filter.query);
        let rows = page
            .visible
            .iter()
            .copied()
            .map(|record| self.row(record, bookmarks, &highlighter, strings))
            .collect();

        PageView {
            rows,
            page: page.page,
            total_pages: page.total_pages,
            filtered_count: filtered.len(),
            total_count: records.len(),
            is_filtered: self.filter.is_active() && filtered.len() != records.len(),
        }
    }

    fn row<'a>(
        &self,
        record: &'a Record,
        bookmarks: &BookmarkStore,
        highlighter: &Highlighter,
        strings: &'a DisplayStrings,
    ) -> RowView<'a> {
        let summary = record.summary().filter(|s| !s.is_empty());
        let (text, max_chars) = match summary {
            Some(summary) if self.show_summaries => (summary, self.limits.summary_chars),
            _ => (record.text().unwrap_or_default(), self.limits.body_chars),
        };
        let preview = preview(text, max_chars);

        let mut body = fragments(preview.text, highlighter, strings);
        if preview.truncated {
            body.push(Fragment::Text(vec![Run::plain(&strings.ellipsis)]));
        }

        RowView {
            record,
            hash: record.hash(),
            filename: record.filename(),
            date: format_date_value(record.get(FIELD_DATE), strings),
            category: record.category(),
            subcategory: record.subcategory(),
            bookmarked: bookmarks.contains(record.hash()),
            body,
        }
    }
}

/// Linkify `text`, then highlight the plain segments.
pub fn fragments<'a>(
    text: &'a str,
    highlighter: &Highlighter,
    strings: &'a DisplayStrings,
) -> Vec<Fragment<'a>> {
    segment(text)
        .into_iter()
        .map(|seg| match seg {
            TextSegment::Plain(plain) => Fragment::Text(highlighter.highlight(plain)),
            url @ TextSegment::Url(_) => Fragment::Link {
                target: url.link_target().unwrap_or_default(),
                label: &strings.link_label,
            },
        })
        .collect()
}
