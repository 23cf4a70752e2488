pub mod excel;

use crate::error::Result;
use gazette_match_common::{MatchRecord, EXPORT_FILE_NAME};
use std::path::{Path, PathBuf};

fn resolve_output_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(EXPORT_FILE_NAME)
    } else {
        output.to_path_buf()
    }
}

/// 現在のレコードを全件Excelに出力する（絞り込み・並べ替えなし）
pub fn export_records(records: &[MatchRecord], output: &Path) -> Result<PathBuf> {
    let output_path = resolve_output_path(output);
    println!("- Excelを生成中...");
    excel::write_match_workbook(records, &output_path)?;
    println!("✔ Excel出力: {}", output_path.display());
    Ok(output_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path_dir() {
        let temp_dir = std::env::temp_dir();
        let resolved = resolve_output_path(&temp_dir);
        assert_eq!(resolved, temp_dir.join(EXPORT_FILE_NAME));
    }

    #[test]
    fn test_resolve_output_path_file() {
        let path = Path::new("/tmp/out/result.xlsx");
        assert_eq!(resolve_output_path(path), path);
    }

    #[test]
    fn test_resolve_output_path_no_extension() {
        let resolved = resolve_output_path(Path::new("outdir"));
        assert_eq!(resolved, Path::new("outdir").join(EXPORT_FILE_NAME));
    }
}
