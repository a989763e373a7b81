//! Export use case
//!
//! Renders everything currently stored, in `find_all` order, to CSV text.

use tracing::info;

use crate::error::PluvioResult;
use crate::export::csv;
use crate::storage::RainfallRepository;

/// Exports all entries to CSV
pub struct ExportRainfall<'a> {
    repository: &'a dyn RainfallRepository,
}

impl<'a> ExportRainfall<'a> {
    pub fn new(repository: &'a dyn RainfallRepository) -> Self {
        Self { repository }
    }

    /// The full CSV text, byte-order mark included
    pub async fn execute(&self) -> PluvioResult<String> {
        let entries = self.repository.find_all().await?;
        let content = csv::render(&entries);
        info!(rows = entries.len(), bytes = content.len(), "rendered rainfall export");
        Ok(content)
    }
}
