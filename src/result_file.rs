//! 照合結果の保存ファイル
//!
//! matchコマンドの出力をJSONで保存し、exportコマンドが
//! 再送信なしでExcelを生成できるようにする。matched配列は
//! バックエンドの返却内容をフィールド順ごと保持する。

use crate::error::Result;
use gazette_match_common::MatchRecord;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 保存される照合結果
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResultFile {
    /// 照合実行日時
    pub matched_at: String,
    /// 使用したしきい値
    pub threshold: u8,
    /// 照合レコード（受信順）
    pub matched: Vec<MatchRecord>,
}

impl MatchResultFile {
    pub fn new(threshold: u8, matched: Vec<MatchRecord>) -> Self {
        Self {
            matched_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            threshold,
            matched,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: MatchResultFile = serde_json::from_str(&content)?;
        Ok(file)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}
