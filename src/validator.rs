//! 入力ファイル検証モジュール
//!
//! 送信前のゲート。宣言メディアタイプ（拡張子から判定）が
//! 許可セットに含まれる場合のみ通過させ、不正なら
//! どちらのファイルかを明示して送信前に中断する。

use crate::error::{GazetteMatchError, Result};
use std::path::Path;

/// Excel（.xlsx）のメディアタイプ
pub const EXCEL_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// PDFのメディアタイプ
pub const PDF_MIME: &str = "application/pdf";

/// 名簿ファイルに許可するメディアタイプ
pub const EXCEL_ALLOWED_TYPES: &[&str] = &[EXCEL_MIME];

/// 官報ファイルに許可するメディアタイプ
pub const PDF_ALLOWED_TYPES: &[&str] = &[PDF_MIME];

/// 拡張子から宣言メディアタイプを判定
pub fn declared_media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "xlsx" => Some(EXCEL_MIME),
        "pdf" => Some(PDF_MIME),
        _ => None,
    }
}

/// ファイルが存在し、宣言メディアタイプが許可セットに含まれるか
pub fn is_valid_file_type(path: &Path, allowed: &[&str]) -> bool {
    if !path.is_file() {
        return false;
    }
    match declared_media_type(path) {
        Some(mime) => allowed.contains(&mime),
        None => false,
    }
}

/// 送信前の入力ゲート（両ファイル必須）
pub fn validate_inputs(excel: &Path, pdf: &Path) -> Result<()> {
    if !is_valid_file_type(excel, EXCEL_ALLOWED_TYPES) {
        return Err(GazetteMatchError::InvalidExcelFile(
            excel.display().to_string(),
        ));
    }
    if !is_valid_file_type(pdf, PDF_ALLOWED_TYPES) {
        return Err(GazetteMatchError::InvalidPdfFile(pdf.display().to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    fn touch(dir: &Path, name: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        File::create(&path).unwrap().write_all(b"dummy").unwrap();
        path
    }

    #[test]
    fn test_declared_media_type() {
        assert_eq!(
            declared_media_type(Path::new("names.xlsx")),
            Some(EXCEL_MIME)
        );
        assert_eq!(
            declared_media_type(Path::new("NAMES.XLSX")),
            Some(EXCEL_MIME)
        );
        assert_eq!(declared_media_type(Path::new("gazette.pdf")), Some(PDF_MIME));
        assert_eq!(declared_media_type(Path::new("names.xls")), None);
        assert_eq!(declared_media_type(Path::new("names.csv")), None);
        assert_eq!(declared_media_type(Path::new("noext")), None);
    }

    #[test]
    fn test_is_valid_file_type() {
        let temp_dir = std::env::temp_dir().join("gazette-match-test-validate");
        fs::create_dir_all(&temp_dir).unwrap();

        let xlsx = touch(&temp_dir, "names.xlsx");
        let pdf = touch(&temp_dir, "gazette.pdf");
        let csv = touch(&temp_dir, "names.csv");

        assert!(is_valid_file_type(&xlsx, EXCEL_ALLOWED_TYPES));
        assert!(is_valid_file_type(&pdf, PDF_ALLOWED_TYPES));

        // 許可セット外
        assert!(!is_valid_file_type(&csv, EXCEL_ALLOWED_TYPES));
        assert!(!is_valid_file_type(&pdf, EXCEL_ALLOWED_TYPES));
        assert!(!is_valid_file_type(&xlsx, PDF_ALLOWED_TYPES));

        // 存在しないファイル
        assert!(!is_valid_file_type(
            &temp_dir.join("missing.xlsx"),
            EXCEL_ALLOWED_TYPES
        ));

        fs::remove_dir_all(&temp_dir).ok();
    }

    #[test]
    fn test_validate_inputs_names_failing_file() {
        let temp_dir = std::env::temp_dir().join("gazette-match-test-inputs");
        fs::create_dir_all(&temp_dir).unwrap();

        let xlsx = touch(&temp_dir, "names.xlsx");
        let pdf = touch(&temp_dir, "gazette.pdf");
        let txt = touch(&temp_dir, "gazette.txt");

        assert!(validate_inputs(&xlsx, &pdf).is_ok());

        // Excel側が不正ならExcelのエラー、ネットワーク層には到達しない
        let err = validate_inputs(&txt, &pdf).unwrap_err();
        assert!(matches!(err, GazetteMatchError::InvalidExcelFile(_)));

        // PDF側が不正ならPDFのエラー
        let err = validate_inputs(&xlsx, &txt).unwrap_err();
        assert!(matches!(err, GazetteMatchError::InvalidPdfFile(_)));

        fs::remove_dir_all(&temp_dir).ok();
    }
}
