//! Excel出力（CLI版）
//!
//! 共通ライブラリのバッファ生成を使用

use crate::error::{GazetteMatchError, Result};
use gazette_match_common::{generate_match_workbook_buffer, MatchRecord};
use std::path::Path;

pub fn write_match_workbook(records: &[MatchRecord], output_path: &Path) -> Result<()> {
    let buffer =
        generate_match_workbook_buffer(records).map_err(GazetteMatchError::ExcelGeneration)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(output_path, buffer)?;
    Ok(())
}
