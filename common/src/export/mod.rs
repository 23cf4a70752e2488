//! Export core shared across CLI and future front ends.

pub mod excel_core;

pub use excel_core::{generate_match_workbook_buffer, EXPORT_FILE_NAME, SHEET_NAME};
