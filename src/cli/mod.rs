//! CLI command handlers for Pluvio
//!
//! Each submodule pairs a clap definition with the handler that runs it
//! against a repository.

pub mod export;
pub mod rainfall;

pub use export::{handle_export_command, ExportArgs};
pub use rainfall::{handle_rainfall_command, RainfallCommands};
