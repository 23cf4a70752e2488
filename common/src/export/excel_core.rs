//! Excel生成（共通ライブラリ）
//!
//! 照合レコードを1シートのワークブックに変換する。
//! 列は No + バックエンド返却順のフィールド名、行は受信順のまま。
//! 数値は数値セル、文字列は文字列セルで書き、再読み込みで
//! 表示と同じ列・値が再現されることを保証する。

use crate::types::{column_order, MatchRecord};
use rust_xlsxwriter::*;
use serde_json::Value;

/// 出力ファイル名
pub const EXPORT_FILE_NAME: &str = "Matched_Deceased_Names.xlsx";

/// シート名
pub const SHEET_NAME: &str = "Matched Names";

/// Excelをバッファに生成
///
/// # Arguments
/// * `records` - 照合レコード（受信順、全件出力・絞り込みなし）
pub fn generate_match_workbook_buffer(records: &[MatchRecord]) -> Result<Vec<u8>, String> {
    let columns = column_order(records);
    let mut workbook = Workbook::new();

    // フォーマット定義
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(SHEET_NAME)
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    // ヘッダ行: No + フィールド名（出現順）
    worksheet
        .write_string_with_format(0, 0, "No", &header_format)
        .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
    for (col, name) in columns.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16 + 1, name, &header_format)
            .map_err(|e| format!("ヘッダ書き込みエラー: {}", e))?;
    }

    // データ行: 1行1レコード、No列は1始まり
    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;
        worksheet
            .write_number(row, 0, (index + 1) as f64)
            .map_err(|e| format!("No列書き込みエラー: {}", e))?;

        for (col_index, name) in columns.iter().enumerate() {
            let col = col_index as u16 + 1;
            match record.get(name) {
                Some(Value::Number(n)) => {
                    worksheet
                        .write_number(row, col, n.as_f64().unwrap_or_default())
                        .map_err(|e| format!("数値書き込みエラー: {}", e))?;
                }
                Some(Value::String(s)) => {
                    worksheet
                        .write_string(row, col, s)
                        .map_err(|e| format!("文字列書き込みエラー: {}", e))?;
                }
                // 欠落・nullは空セルのまま
                Some(Value::Null) | None => {}
                Some(other) => {
                    worksheet
                        .write_string(row, col, other.to_string())
                        .map_err(|e| format!("値書き込みエラー: {}", e))?;
                }
            }
        }
    }

    // バッファに書き出し
    workbook
        .save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}
