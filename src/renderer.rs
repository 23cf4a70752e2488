//! 照合結果テーブル表示
//!
//! No列（1始まり）+ バックエンド返却順のフィールド列で
//! 固定幅テーブルを組み立てる。列順はExcel出力と同じ
//! column_order を共有する。

use gazette_match_common::{column_order, MatchRecord};

/// あいまい一致（スコア100未満）の行マーカー
const INEXACT_MARK: &str = "*";

/// テーブル文字列を組み立てる
pub fn render_match_table(records: &[MatchRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let columns = column_order(records);
    let mut headers: Vec<String> = vec!["No".to_string()];
    headers.extend(columns.iter().cloned());

    // 各行のセル文字列（スコア列はマーカー込み）
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let mut cells = vec![(index + 1).to_string()];
        for name in &columns {
            let mut value = record.display_value(name);
            if name == gazette_match_common::SCORE_FIELD && !record.is_exact() {
                value.push(' ');
                value.push_str(INEXACT_MARK);
            }
            cells.push(value);
        }
        rows.push(cells);
    }

    // 列幅 = ヘッダと全セルの最大文字数
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for cells in &rows {
        for (i, cell) in cells.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&render_line(&headers, &widths));
    out.push_str(&separator_line(&widths));
    for cells in &rows {
        out.push_str(&render_line(cells, &widths));
    }

    if records.iter().any(|r| !r.is_exact()) {
        out.push_str(&format!(
            "{} スコア100未満（あいまい一致）\n",
            INEXACT_MARK
        ));
    }

    out
}

/// テーブルを標準出力に表示
pub fn print_match_table(records: &[MatchRecord]) {
    print!("{}", render_match_table(records));
}

fn render_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width - cell.chars().count();
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    format!("{}\n", padded.join(" | ").trim_end())
}

fn separator_line(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("{}\n", dashes.join("-+-"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> MatchRecord {
        serde_json::from_value(value).expect("レコード変換失敗")
    }

    #[test]
    fn test_render_empty_is_blank() {
        assert_eq!(render_match_table(&[]), "");
    }

    #[test]
    fn test_render_numbered_rows_in_order() {
        let records = vec![
            record(json!({"excelName": "Perera", "gazetteMatch": "Perera W.A.", "score": 100})),
            record(json!({"excelName": "Silva", "gazetteMatch": "Silva K.", "score": 92})),
        ];

        let table = render_match_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        // ヘッダ + 区切り + 2行 + 凡例
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("No"));
        assert!(lines[0].contains("excelName"));
        assert!(lines[0].contains("gazetteMatch"));
        assert!(lines[0].contains("score"));
        assert!(lines[2].starts_with("1 "));
        assert!(lines[2].contains("Perera"));
        assert!(lines[3].starts_with("2 "));
        assert!(lines[3].contains("Silva"));
    }

    #[test]
    fn test_render_marks_inexact_rows() {
        let records = vec![
            record(json!({"excelName": "Perera", "score": 100})),
            record(json!({"excelName": "Silva", "score": 92})),
        ];

        let table = render_match_table(&records);
        let lines: Vec<&str> = table.lines().collect();

        // スコア100はマーカーなし、100未満はマーカーあり
        assert!(!lines[2].contains('*'));
        assert!(lines[3].contains("92 *"));
        // 凡例が付く
        assert!(table.contains("スコア100未満"));
    }

    #[test]
    fn test_render_all_exact_has_no_legend() {
        let records = vec![record(json!({"excelName": "Perera", "score": 100}))];
        let table = render_match_table(&records);
        assert!(!table.contains("スコア100未満"));
    }

    #[test]
    fn test_render_projects_union_columns() {
        let records = vec![
            record(json!({"excelName": "A", "score": 100})),
            record(json!({"excelName": "B", "score": 92, "gazetteDate": "2024-03-15"})),
        ];

        let table = render_match_table(&records);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].contains("gazetteDate"));
        assert!(lines[3].contains("2024-03-15"));
    }
}
