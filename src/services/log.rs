//! Log use case
//!
//! Builds an entry from raw form input, validates it, and upserts it.

use tracing::{debug, info};

use crate::error::PluvioResult;
use crate::models::{validate_entry, RainfallEntry};
use crate::storage::RainfallRepository;

/// Records one day's rainfall
pub struct LogRainfall<'a> {
    repository: &'a dyn RainfallRepository,
}

impl<'a> LogRainfall<'a> {
    /// Create the use case over a repository
    pub fn new(repository: &'a dyn RainfallRepository) -> Self {
        Self { repository }
    }

    /// Validate and save a measurement
    ///
    /// A validation failure is returned as-is and nothing is written. On
    /// success the stored record is returned, with its id.
    pub async fn execute(&self, date: &str, amount: f64) -> PluvioResult<RainfallEntry> {
        let entry = RainfallEntry::new(date, amount);

        if let Err(e) = validate_entry(&entry) {
            debug!(date, amount, field = e.field(), "rejected rainfall entry: {}", e);
            return Err(e.into());
        }

        let saved = self.repository.save(&entry).await?;
        info!(date = %saved.date, amount = saved.amount, id = ?saved.id, "logged rainfall");
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PluvioError;
    use crate::models::ValidationError;
    use crate::services::testing::CountingRepository;
    use crate::storage::MemoryRainfallRepository;
    use chrono::{Days, Local};

    #[tokio::test]
    async fn test_logs_valid_entry() {
        let repo = MemoryRainfallRepository::new();
        let saved = LogRainfall::new(&repo)
            .execute("2026-01-17", 12.5)
            .await
            .unwrap();

        assert!(saved.id.is_some());
        assert_eq!(saved.date, "2026-01-17");
        assert_eq!(saved.amount, 12.5);
        assert_eq!(repo.find_by_date("2026-01-17").await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_same_date_updates_in_place() {
        let repo = MemoryRainfallRepository::new();
        let use_case = LogRainfall::new(&repo);

        let first = use_case.execute("2026-01-17", 5.0).await.unwrap();
        let second = use_case.execute("2026-01-17", 8.0).await.unwrap();

        assert_eq!(first.id, second.id);
        let all = repo.find_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].amount, 8.0);
    }

    #[tokio::test]
    async fn test_validation_failure_skips_storage() {
        let repo = CountingRepository::new();
        let use_case = LogRainfall::new(&repo);

        let err = use_case.execute("2026-01-17", -5.0).await.unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            PluvioError::Validation(ValidationError::NegativeAmount)
        ));

        let err = use_case.execute("17/01/2026", 5.0).await.unwrap_err();
        assert!(matches!(err, PluvioError::Validation(ValidationError::DateFormat)));

        let err = use_case.execute("2026-01-17", 1500.0).await.unwrap_err();
        assert!(err.to_string().contains("suspecte"));

        assert_eq!(repo.saves(), 0);
    }

    #[tokio::test]
    async fn test_rejects_far_future_date() {
        let repo = CountingRepository::new();
        let in_two_days = Local::now()
            .date_naive()
            .checked_add_days(Days::new(2))
            .unwrap()
            .format("%Y-%m-%d")
            .to_string();

        let err = LogRainfall::new(&repo)
            .execute(&in_two_days, 3.0)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            PluvioError::Validation(ValidationError::DateInFuture)
        ));
        assert_eq!(repo.saves(), 0);
    }

    #[tokio::test]
    async fn test_valid_entry_reaches_storage_once() {
        let repo = CountingRepository::new();
        LogRainfall::new(&repo)
            .execute("2026-01-17", 0.0)
            .await
            .unwrap();
        assert_eq!(repo.saves(), 1);
    }
}
