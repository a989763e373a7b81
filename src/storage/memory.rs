//! In-memory rainfall repository
//!
//! Keeps entries in a `BTreeMap` keyed by date so ordered scans are cheap.
//! Nothing survives the process; useful for tests and dry runs.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use tracing::debug;

use crate::error::{PluvioError, PluvioResult};
use crate::models::RainfallEntry;

use super::RainfallRepository;

#[derive(Debug, Default)]
struct MemoryState {
    entries: BTreeMap<String, RainfallEntry>,
    last_id: i64,
}

/// Repository backed by process memory
#[derive(Debug, Default)]
pub struct MemoryRainfallRepository {
    state: RwLock<MemoryState>,
}

impl MemoryRainfallRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries
    #[cfg(test)]
    pub(crate) fn count(&self) -> PluvioResult<usize> {
        let state = self.state.read().map_err(|e| {
            PluvioError::Storage(format!("Verrou de lecture indisponible : {}", e))
        })?;
        Ok(state.entries.len())
    }
}

#[async_trait]
impl RainfallRepository for MemoryRainfallRepository {
    async fn save(&self, entry: &RainfallEntry) -> PluvioResult<RainfallEntry> {
        // Mirrors the SQL CHECK constraint, which NaN also fails
        if entry.amount.is_nan() || entry.amount < 0.0 {
            return Err(PluvioError::Storage(format!(
                "CHECK constraint failed: amount >= 0 (got {})",
                entry.amount
            )));
        }

        let mut state = self.state.write().map_err(|e| {
            PluvioError::Storage(format!("Verrou d'écriture indisponible : {}", e))
        })?;

        let id = match state.entries.get(&entry.date).and_then(|e| e.id) {
            Some(id) => {
                debug!(date = %entry.date, id, "updating rainfall entry");
                id
            }
            None => {
                state.last_id += 1;
                debug!(date = %entry.date, id = state.last_id, "inserting rainfall entry");
                state.last_id
            }
        };

        let stored = entry.with_id(id);
        state.entries.insert(stored.date.clone(), stored.clone());
        Ok(stored)
    }

    async fn find_all(&self) -> PluvioResult<Vec<RainfallEntry>> {
        let state = self.state.read().map_err(|e| {
            PluvioError::Storage(format!("Verrou de lecture indisponible : {}", e))
        })?;
        Ok(state.entries.values().rev().cloned().collect())
    }

    async fn find_by_date(&self, date: &str) -> PluvioResult<Option<RainfallEntry>> {
        let state = self.state.read().map_err(|e| {
            PluvioError::Storage(format!("Verrou de lecture indisponible : {}", e))
        })?;
        Ok(state.entries.get(date).cloned())
    }

    async fn find_by_date_range(
        &self,
        start: &str,
        end: &str,
    ) -> PluvioResult<Vec<RainfallEntry>> {
        // BTreeMap::range panics on an inverted range
        if start > end {
            return Ok(Vec::new());
        }

        let state = self.state.read().map_err(|e| {
            PluvioError::Storage(format!("Verrou de lecture indisponible : {}", e))
        })?;
        Ok(state
            .entries
            .range(start.to_string()..=end.to_string())
            .rev()
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}
