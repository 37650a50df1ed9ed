use super::{Command, load_file};
use crate::cli::FilterArgs;
use crate::config::Config;
use crate::error::Result;
use std::path::PathBuf;
use view_core::{Facets, ResultStats, filter};

pub struct StatsCommand {
    config: Config,
    file: PathBuf,
    filter: FilterArgs,
}

impl StatsCommand {
    pub fn new(config: Config, file: PathBuf, filter: FilterArgs) -> Self {
        Self { config, file, filter }
    }

    fn describe(stats: &ResultStats, facets: &Facets, not_available: &str) -> String {
        let date_range = match stats.date_range {
            Some((first, last)) => format!("{first} .. {last}"),
            None => not_available.to_string(),
        };
        let list = |values: &[String]| {
            if values.is_empty() {
                not_available.to_string()
            } else {
                values.join(", ")
            }
        };
        format!(
            "records:       {}\nsenders:       {}\nrecipients:    {}\ndates:         {}\ncategories:    {}\nsubcategories: {}",
            stats.total,
            stats.unique_senders,
            stats.unique_recipients,
            date_range,
            list(&facets.categories),
            list(&facets.subcategories),
        )
    }
}

#[async_trait::async_trait]
impl Command for StatsCommand {
    async fn execute(&self) -> Result<()> {
        let records = load_file(&self.file).await?;
        let filtered = filter(&records, &self.filter.to_state());
        let stats = ResultStats::compute(filtered.iter().copied());
        let facets = Facets::collect(&records);
        println!(
            "{}",
            Self::describe(&stats, &facets, &self.config.strings.not_available)
        );
        Ok(())
    }
}
