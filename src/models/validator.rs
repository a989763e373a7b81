//! Business rules for rainfall entries
//!
//! Two independent checks run in order, date then amount. The first failing
//! check wins. Messages are the user-facing strings shown next to the form
//! field, so they are kept in French.

use chrono::{Days, Local, NaiveDate};
use thiserror::Error;

use super::entry::RainfallEntry;

/// Largest plausible daily rainfall, in millimeters
pub const MAX_AMOUNT_MM: f64 = 1000.0;

/// How many days past today an entry date may be
pub const FUTURE_TOLERANCE_DAYS: u64 = 1;

/// Reason an entry was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("La date est requise")]
    DateRequired,

    #[error("La date doit être au format YYYY-MM-DD")]
    DateFormat,

    #[error("La date est invalide")]
    InvalidDate,

    #[error("La date ne peut pas être plus de 1 jour dans le futur")]
    DateInFuture,

    #[error("La quantité doit être un nombre")]
    AmountNotANumber,

    #[error("La quantité ne peut pas être négative")]
    NegativeAmount,

    #[error("La quantité semble suspecte (supérieure à 1000 mm). Veuillez vérifier.")]
    SuspiciousAmount,
}

impl ValidationError {
    /// Name of the form field the error belongs to
    pub fn field(&self) -> &'static str {
        match self {
            Self::DateRequired | Self::DateFormat | Self::InvalidDate | Self::DateInFuture => {
                "date"
            }
            Self::AmountNotANumber | Self::NegativeAmount | Self::SuspiciousAmount => "amount",
        }
    }
}

/// Validate an entry against today's local date
pub fn validate_entry(entry: &RainfallEntry) -> Result<(), ValidationError> {
    validate_entry_on(entry, local_today())
}

/// Validate an entry as if `today` were the current local date
pub fn validate_entry_on(entry: &RainfallEntry, today: NaiveDate) -> Result<(), ValidationError> {
    validate_date_on(&entry.date, today)?;
    validate_amount(entry.amount)
}

/// Validate a date string against today's local date
pub fn validate_date(date: &str) -> Result<NaiveDate, ValidationError> {
    validate_date_on(date, local_today())
}

/// Validate a date string as if `today` were the current local date
///
/// Returns the parsed calendar date on success.
pub fn validate_date_on(date: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let parsed = parse_iso_date(date)?;

    if let Some(latest) = today.checked_add_days(Days::new(FUTURE_TOLERANCE_DAYS)) {
        if parsed > latest {
            return Err(ValidationError::DateInFuture);
        }
    }

    Ok(parsed)
}

/// Parse a strict `YYYY-MM-DD` calendar date, with no range check
pub fn parse_iso_date(date: &str) -> Result<NaiveDate, ValidationError> {
    if date.is_empty() {
        return Err(ValidationError::DateRequired);
    }

    let (year, month, day) = split_iso_date(date).ok_or(ValidationError::DateFormat)?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(ValidationError::InvalidDate)
}

/// Validate a rainfall amount in millimeters
pub fn validate_amount(amount: f64) -> Result<(), ValidationError> {
    if !amount.is_finite() {
        return Err(ValidationError::AmountNotANumber);
    }

    if amount < 0.0 {
        return Err(ValidationError::NegativeAmount);
    }

    if amount > MAX_AMOUNT_MM {
        return Err(ValidationError::SuspiciousAmount);
    }

    Ok(())
}

/// Parse a raw amount typed by the user
///
/// Accepts a comma as decimal separator. Anything unparseable is reported
/// the same way as a non-finite number.
pub fn parse_amount(raw: &str) -> Result<f64, ValidationError> {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .map_err(|_| ValidationError::AmountNotANumber)
}

/// Split `YYYY-MM-DD` (ASCII digits only) into its numeric parts
fn split_iso_date(date: &str) -> Option<(i32, u32, u32)> {
    let bytes = date.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    let year = date[0..4].parse().ok()?;
    let month = date[5..7].parse().ok()?;
    let day = date[8..10].parse().ok()?;
    Some((year, month, day))
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
