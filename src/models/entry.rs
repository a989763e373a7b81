//! Rainfall entry model
//!
//! A rainfall entry is one day's measurement at the gauge, in millimeters.
//! The calendar date is the natural key: there is at most one entry per day.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single daily rainfall measurement
///
/// Entries are plain values. Persisting one hands back a new record (with its
/// assigned `id`) rather than mutating the caller's copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainfallEntry {
    /// Surrogate key, assigned by the repository on first insert
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Measurement day, canonical form `YYYY-MM-DD`
    pub date: String,

    /// Rainfall in millimeters
    pub amount: f64,

    /// When the entry was first created
    pub created_at: DateTime<Utc>,
}

impl RainfallEntry {
    /// Create a new, unvalidated entry stamped with the current time
    pub fn new(date: impl Into<String>, amount: f64) -> Self {
        Self {
            id: None,
            date: date.into(),
            amount,
            created_at: Utc::now(),
        }
    }

    /// Return a copy of this entry carrying the given id
    pub fn with_id(&self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    /// Parse the date field, if it is a real `YYYY-MM-DD` calendar date
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// `created_at` in its stored, sortable text form
    pub fn created_at_text(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Nanos, true)
    }
}

impl fmt::Display for RainfallEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} mm", self.date, self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let before = Utc::now();
        let entry = RainfallEntry::new("2026-01-17", 12.5);
        let after = Utc::now();

        assert_eq!(entry.date, "2026-01-17");
        assert_eq!(entry.amount, 12.5);
        assert!(entry.id.is_none());
        assert!(entry.created_at >= before && entry.created_at <= after);
    }

    #[test]
    fn test_new_entry_does_not_validate() {
        let entry = RainfallEntry::new("not-a-date", -3.0);
        assert_eq!(entry.date, "not-a-date");
        assert_eq!(entry.amount, -3.0);
    }

    #[test]
    fn test_with_id_leaves_original_untouched() {
        let entry = RainfallEntry::new("2026-01-17", 1.0);
        let saved = entry.with_id(7);

        assert_eq!(saved.id, Some(7));
        assert!(entry.id.is_none());
        assert_eq!(saved.created_at, entry.created_at);
    }

    #[test]
    fn test_calendar_date() {
        let entry = RainfallEntry::new("2026-02-28", 0.0);
        assert_eq!(
            entry.calendar_date(),
            NaiveDate::from_ymd_opt(2026, 2, 28)
        );
        assert!(RainfallEntry::new("2026-02-30", 0.0).calendar_date().is_none());
    }

    #[test]
    fn test_created_at_text_is_sortable() {
        let mut early = RainfallEntry::new("2026-01-01", 0.0);
        early.created_at = DateTime::parse_from_rfc3339("2026-01-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut late = early.clone();
        late.created_at = DateTime::parse_from_rfc3339("2026-01-01T21:30:00Z")
            .unwrap()
            .with_timezone(&Utc);

        assert_eq!(early.created_at_text(), "2026-01-01T08:00:00.000000000Z");
        assert!(early.created_at_text() < late.created_at_text());
    }

    #[test]
    fn test_serde_round_trip() {
        let entry = RainfallEntry::new("2026-01-17", 4.2).with_id(3);
        let json = serde_json::to_string(&entry).unwrap();
        let back: RainfallEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
