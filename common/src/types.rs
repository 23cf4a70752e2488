//! 照合結果の型定義
//!
//! CLIと将来のフロントエンドで共有される型:
//! - MatchRecord: バックエンドが返す照合レコード（オープンマップ）
//! - MatchOutcome: 1回の照合リクエストの結果
//!
//! バックエンドの配備先によってレコードのフィールド構成が異なる
//! （excelName形式 / nameOfTheDeceased+付帯列形式）ため、レコードは
//! 固定構造体ではなくフィールド名→値の挿入順マップとして保持する。
//! クライアントが解釈するのは score のみで、他は表示・出力への
//! パススルー。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// しきい値の下限
pub const THRESHOLD_MIN: u8 = 80;
/// しきい値の上限
pub const THRESHOLD_MAX: u8 = 100;
/// しきい値のデフォルト（完全一致のみ）
pub const THRESHOLD_DEFAULT: u8 = 100;

/// スコアフィールド名（常に数値で存在する唯一の必須フィールド）
pub const SCORE_FIELD: &str = "score";

/// 完全一致スコア
const EXACT_SCORE: f64 = 100.0;

/// 照合レコード（1件の名前一致）
///
/// フィールドはバックエンドの返却順のまま保持される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchRecord(pub Map<String, Value>);

impl MatchRecord {
    /// 類似度スコア（0-100）
    pub fn score(&self) -> Option<f64> {
        self.0.get(SCORE_FIELD).and_then(Value::as_f64)
    }

    /// 完全一致か（スコア100未満はあいまい一致）
    pub fn is_exact(&self) -> bool {
        self.score().map_or(false, |s| s >= EXACT_SCORE)
    }

    /// フィールド名を返却順で列挙
    pub fn field_names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// フィールド値を取得
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// 表示用文字列（文字列はそのまま、数値は十進表記、欠落は空）
    pub fn display_value(&self, name: &str) -> String {
        match self.0.get(name) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Null) | None => String::new(),
            Some(other) => other.to_string(),
        }
    }
}

/// 1回の照合リクエストの結果
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    /// 一致レコードあり（バックエンドの返却順のまま）
    Matched(Vec<MatchRecord>),
    /// 正常応答だが一致なし（matchedが欠落・空・配列以外）
    NoMatch,
    /// 通信エラー・非2xx・ボディ解析不能
    TransportFailure(String),
}

/// 表示・Excel出力で共有する列順
///
/// 全レコードのフィールド名を出現順で和集合にする。
/// テーブルとシートが常に同じ列を同じ順で持つことを保証する。
pub fn column_order(records: &[MatchRecord]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for name in record.field_names() {
            if !columns.iter().any(|c| c == name) {
                columns.push(name.clone());
            }
        }
    }
    columns
}
