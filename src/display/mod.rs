//! Display formatting for terminal output
//!
//! Tables and charts of rainfall entries.

pub mod chart;
pub mod entry;

pub use chart::format_rainfall_chart;
pub use entry::{format_entry_details, format_entry_table};
