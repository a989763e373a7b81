//! Export module for Pluvio
//!
//! Produces the exact CSV text and file name handed to the user. Getting the
//! bytes onto disk (or stdout) is the caller's job.

pub mod csv;

pub use self::csv::{escape_field, filename, filename_for, render};
