//! Core data models for Pluvio
//!
//! The rainfall entry and the business rules it must satisfy before it is
//! stored.

pub mod entry;
pub mod validator;

pub use entry::RainfallEntry;
pub use validator::{
    parse_amount, parse_iso_date, validate_amount, validate_date, validate_date_on, validate_entry,
    validate_entry_on, ValidationError, FUTURE_TOLERANCE_DAYS, MAX_AMOUNT_MM,
};
