//! List use case

use crate::error::PluvioResult;
use crate::models::RainfallEntry;
use crate::storage::RainfallRepository;

/// Returns every stored entry, most recent date first
pub struct ListRainfall<'a> {
    repository: &'a dyn RainfallRepository,
}

impl<'a> ListRainfall<'a> {
    pub fn new(repository: &'a dyn RainfallRepository) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> PluvioResult<Vec<RainfallEntry>> {
        self.repository.find_all().await
    }
}
