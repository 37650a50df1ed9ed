use super::{Command, load_file};
use crate::cli::FilterArgs;
use crate::config::Config;
use crate::error::Result;
use crate::render;
use std::path::PathBuf;
use view_core::{BookmarkStore, ResultView};

pub struct ListCommand {
    config: Config,
    file: PathBuf,
    filter: FilterArgs,
    page: usize,
    summaries: bool,
}

impl ListCommand {
    pub fn new(config: Config, file: PathBuf, filter: FilterArgs, page: usize, summaries: bool) -> Self {
        Self {
            config,
            file,
            filter,
            page,
            summaries,
        }
    }
}

#[async_trait::async_trait]
impl Command for ListCommand {
    async fn execute(&self) -> Result<()> {
        let records = load_file(&self.file).await?;

        let mut view = ResultView::new()
            .with_page_size(self.config.page_size)
            .with_limits(self.config.display.limits());
        view.set_filter(self.filter.to_state());
        view.set_show_summaries(self.summaries);
        view.go_to(self.page);

        let bookmarks = BookmarkStore::new();
        let page = view.render(&records, &bookmarks, &self.config.strings);
        if page.page != self.page {
            tracing::info!("page {} clamped to {}", self.page, page.page);
        }
        println!(
            "{}",
            render::page(&page, &self.config.display, &self.config.strings)
        );
        Ok(())
    }
}
