//! 名簿Excelプレビューモジュール
//!
//! 送信前の確認用に、名簿Excelの先頭シートから1列目の
//! 値を読み出す。内容の解釈はしない（ヘッダ行もそのまま返す）。

use crate::error::{GazetteMatchError, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use std::path::Path;

/// 先頭シートの1列目を読み出す（空セルはスキップ）
pub fn read_name_column(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(GazetteMatchError::FileNotFound(path.display().to_string()));
    }

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| GazetteMatchError::ExcelRead(format!("{}: {}", path.display(), e)))?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| GazetteMatchError::ExcelRead("シートがありません".into()))?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| GazetteMatchError::ExcelRead(format!("{}: {}", sheet_name, e)))?;

    let mut names = Vec::new();
    for row in range.rows() {
        let cell = match row.first() {
            Some(c) => c,
            None => continue,
        };
        let text = match cell {
            Data::String(s) => s.trim().to_string(),
            Data::Empty => continue,
            other => other.to_string().trim().to_string(),
        };
        if !text.is_empty() {
            names.push(text);
        }
    }

    Ok(names)
}
