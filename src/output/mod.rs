//! Output formatting for analysis reports.
//!
//! This module handles rendering a [`Report`](crate::models::Report):
//! - [`json`] - JSON output
//! - [`terminal`] - Terminal table with colors

mod json;
mod terminal;

pub use json::report_json;
pub use terminal::{print_report, report_rows};
