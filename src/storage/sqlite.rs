//! SQLite rainfall repository
//!
//! A single-file embedded database accessed through an `sqlx` pool. The
//! schema enforces one row per date and a non-negative amount regardless of
//! what the application layer checked.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use crate::error::{PluvioError, PluvioResult};
use crate::models::RainfallEntry;

use super::RainfallRepository;

const CREATE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS rainfall_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL UNIQUE,
    amount REAL NOT NULL CHECK(amount >= 0),
    created_at TEXT NOT NULL
)
"#;

const CREATE_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_rainfall_entries_date ON rainfall_entries(date DESC)";

const SELECT_COLUMNS: &str = "SELECT id, date, amount, created_at FROM rainfall_entries";

/// Repository backed by an SQLite database
#[derive(Debug, Clone)]
pub struct SqliteRainfallRepository {
    pool: SqlitePool,
}

impl SqliteRainfallRepository {
    /// Open (creating if needed) the database file at `path`
    pub async fn open(path: impl AsRef<Path>) -> PluvioResult<Self> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await
            .map_err(|e| {
                PluvioError::Storage(format!("Impossible d'ouvrir {} : {}", path.display(), e))
            })?;

        info!(path = %path.display(), "opened rainfall database");
        Self::with_pool(pool).await
    }

    /// Open a private in-memory database
    ///
    /// The pool holds exactly one connection that is never recycled, since
    /// each SQLite memory connection is its own database.
    pub async fn in_memory() -> PluvioResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        Self::with_pool(pool).await
    }

    async fn with_pool(pool: SqlitePool) -> PluvioResult<Self> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        sqlx::query(CREATE_DATE_INDEX).execute(&pool).await?;
        Ok(Self { pool })
    }

    /// Close the pool, flushing the database file
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_entry(row: &SqliteRow) -> PluvioResult<RainfallEntry> {
    let created_at: String = row.try_get("created_at")?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map_err(|e| {
            PluvioError::Storage(format!("created_at invalide '{}' : {}", created_at, e))
        })?
        .with_timezone(&Utc);

    Ok(RainfallEntry {
        id: Some(row.try_get("id")?),
        date: row.try_get("date")?,
        amount: row.try_get("amount")?,
        created_at,
    })
}

#[async_trait]
impl RainfallRepository for SqliteRainfallRepository {
    async fn save(&self, entry: &RainfallEntry) -> PluvioResult<RainfallEntry> {
        let row = sqlx::query(
            r#"
            INSERT INTO rainfall_entries (date, amount, created_at)
            VALUES (?, ?, ?)
            ON CONFLICT(date) DO UPDATE SET
                amount = excluded.amount,
                created_at = excluded.created_at
            RETURNING id, date, amount, created_at
            "#,
        )
        .bind(entry.date.as_str())
        .bind(entry.amount)
        .bind(entry.created_at_text())
        .fetch_one(&self.pool)
        .await?;

        let saved = row_to_entry(&row)?;
        debug!(date = %saved.date, id = ?saved.id, amount = saved.amount, "saved rainfall entry");
        Ok(saved)
    }

    async fn find_all(&self) -> PluvioResult<Vec<RainfallEntry>> {
        let rows = sqlx::query(&format!("{} ORDER BY date DESC", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_entry).collect()
    }

    async fn find_by_date(&self, date: &str) -> PluvioResult<Option<RainfallEntry>> {
        let row = sqlx::query(&format!("{} WHERE date = ?", SELECT_COLUMNS))
            .bind(date)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_entry).transpose()
    }

    async fn find_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> PluvioResult<Vec<RainfallEntry>> {
        let rows = sqlx::query(&format!(
            "{} WHERE date >= ? AND date <= ? ORDER BY date DESC",
            SELECT_COLUMNS
        ))
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_entry).collect()
    }
}
