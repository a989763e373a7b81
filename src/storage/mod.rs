//! Storage layer for Pluvio
//!
//! The use cases only see the [`RainfallRepository`] capability set. Two
//! adapters implement it: an embedded SQLite file (the default) and an
//! in-memory map.
//!
//! Repositories never run business validation; callers validate before
//! `save`. The stores still refuse duplicate dates and negative amounts at
//! the structural level.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;

use crate::config::paths::PluvioPaths;
use crate::error::PluvioResult;
use crate::models::RainfallEntry;

pub use memory::MemoryRainfallRepository;
pub use sqlite::SqliteRainfallRepository;

/// Persistence contract for rainfall entries, keyed by date
#[async_trait]
pub trait RainfallRepository: Send + Sync {
    /// Insert the entry, or update the one already stored for the same date
    ///
    /// On update, `amount` and `created_at` are overwritten and the existing
    /// `id` is kept. Returns the stored record with its `id`.
    async fn save(&self, entry: &RainfallEntry) -> PluvioResult<RainfallEntry>;

    /// All entries, most recent date first
    async fn find_all(&self) -> PluvioResult<Vec<RainfallEntry>>;

    /// The entry for one date, if any
    async fn find_by_date(&self, date: &str) -> PluvioResult<Option<RainfallEntry>>;

    /// Entries with `start <= date <= end`, most recent date first
    ///
    /// Empty when `start > end`.
    async fn find_by_date_range(&self, start: &str, end: &str)
        -> PluvioResult<Vec<RainfallEntry>>;
}

/// Open the default file-backed repository under the data directory
pub async fn open_repository(paths: &PluvioPaths) -> PluvioResult<SqliteRainfallRepository> {
    paths.ensure_directories()?;
    SqliteRainfallRepository::open(paths.database_file()).await
}
