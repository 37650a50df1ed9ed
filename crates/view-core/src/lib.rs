// view-core/src/lib.rs
//! Client-side result view engine.
//!
//! Works on the record collections a document search server returns:
//! - linkify and highlight free text for display
//! - filter by category, subcategory and free-text terms
//! - paginate the filtered collection
//! - keep session bookmarks keyed by content hash
//! - export results or bookmarks as CSV
//!
//! Nothing here does I/O. Shells load the records, hold the state and draw
//! the `PageView` returned by [`ResultView::render`].

pub mod bookmark;
pub mod export;
pub mod filter;
pub mod format;
pub mod highlight;
pub mod linkify;
pub mod paginate;
pub mod record;
pub mod stats;
pub mod strings;
pub mod view;

// 重导出核心类型
pub use bookmark::BookmarkStore;
pub use export::{CSV_CONTENT_TYPE, Export, ExportKind, export, export_dated, to_csv};
pub use filter::{FilterIndex, FilterState, filter};
pub use format::{Preview, format_date, format_date_value, parse_date, parse_date_value, preview};
pub use highlight::{Highlighter, Run, highlight};
pub use linkify::{TextSegment, segment};
pub use paginate::{Navigation, PAGE_SIZE, Page, navigate, paginate, total_pages};
pub use record::{Record, RecordError, Searchable, load_records};
pub use stats::{Facets, ResultStats};
pub use strings::DisplayStrings;
pub use view::{Fragment, PageView, PreviewLimits, ResultView, RowView};
