use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use view_core::FilterState;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase verbosity. Can be used multiple times (e.g., -v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Whitespace-separated terms, all of which must appear
    #[arg(short, long, default_value = "")]
    pub query: String,

    /// Exact category to keep
    #[arg(short, long)]
    pub category: Option<String>,

    /// Exact subcategory to keep
    #[arg(short, long)]
    pub subcategory: Option<String>,
}

impl FilterArgs {
    pub fn to_state(&self) -> FilterState {
        FilterState {
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            query: self.query.clone(),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of records
    List {
        /// JSON file with a record array or a `results`/`documents` envelope
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
        /// 1-based page number; out-of-range pages are clamped
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Preview summaries instead of body text where available
        #[arg(long)]
        summaries: bool,
    },
    /// Summarize the filtered records
    Stats {
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Write the filtered records, or the given bookmarks, as CSV
    Export {
        file: PathBuf,
        #[command(flatten)]
        filter: FilterArgs,
        /// Content hash to bookmark; repeat to export several
        #[arg(short, long = "bookmark")]
        bookmarks: Vec<String>,
    },
}
