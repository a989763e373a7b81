//! Service layer for Pluvio
//!
//! Thin use cases sitting between the caller and the repository: logging a
//! measurement, listing what is stored, and exporting it to CSV. Each one
//! borrows the repository it was built with; nothing is global.

pub mod export;
pub mod list;
pub mod log;

pub use export::ExportRainfall;
pub use list::ListRainfall;
pub use log::LogRainfall;
