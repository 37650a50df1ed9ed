pub mod export;
pub mod list;
pub mod stats;

use crate::error::{Result, WrapErr};
use std::path::Path;
use view_core::Record;

pub use export::ExportCommand;
pub use list::ListCommand;
pub use stats::StatsCommand;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Read a record collection saved from the search or listing endpoint.
pub async fn load_file(path: &Path) -> Result<Vec<Record>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Cannot read {}", path.display()))?;
    let records = view_core::load_records(&json)
        .with_context(|| format!("Invalid record collection in {}", path.display()))?;
    tracing::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}
