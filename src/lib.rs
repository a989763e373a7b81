//! Pluvio - a personal rainfall log
//!
//! Records one rainfall measurement per day, lists and charts what was
//! recorded, and exports it to CSV for spreadsheet tools.
//!
//! # Architecture
//!
//! - `config`: Paths and user settings
//! - `error`: Custom error types
//! - `models`: The rainfall entry and its validation rules
//! - `storage`: Date-keyed repository with SQLite and in-memory adapters
//! - `services`: Log, list and export use cases
//! - `export`: CSV codec
//! - `display`: Terminal tables and charts
//! - `cli`: Command definitions and handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use pluvio::services::LogRainfall;
//! use pluvio::storage::SqliteRainfallRepository;
//!
//! let repository = SqliteRainfallRepository::in_memory().await?;
//! let saved = LogRainfall::new(&repository).execute("2026-01-17", 12.5).await?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{PluvioError, PluvioResult};
