//! Configuration module for Pluvio
//!
//! - Path resolution (data directory, database file, export directory)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PluvioPaths;
pub use settings::{Settings, MAX_CHART_WIDTH};
