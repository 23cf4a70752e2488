//! Gazette Match Common Library
//!
//! CLIと将来のフロントエンドで共有される型とユーティリティ

pub mod error;
#[cfg(feature = "excel")]
pub mod export;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
#[cfg(feature = "excel")]
pub use export::{generate_match_workbook_buffer, EXPORT_FILE_NAME, SHEET_NAME};
pub use parser::parse_match_response;
pub use types::{
    column_order, MatchOutcome, MatchRecord, SCORE_FIELD, THRESHOLD_DEFAULT, THRESHOLD_MAX,
    THRESHOLD_MIN,
};
