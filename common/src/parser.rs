//! 照合サービスのレスポンスパーサー
//!
//! 正常応答のボディから matched 配列を取り出し、
//! 「一致あり」「一致なし」「ボディ不正」を区別する。

use crate::error::{Error, Result};
use crate::types::{MatchRecord, SCORE_FIELD};
use serde_json::Value;

/// レスポンスボディをパース
///
/// 区別:
/// - `Ok(Some(records))` - matched 配列に1件以上のレコード
/// - `Ok(None)` - matched が欠落・空・配列以外（「一致なし」扱い）
/// - `Err` - ボディが構造化データとして解析できない、またはレコードに
///   数値の score がない
///
/// # Arguments
/// * `body` - レスポンスボディ文字列
///
/// # Examples
/// ```
/// use gazette_match_common::parse_match_response;
///
/// let body = r#"{"matched": [{"excelName": "Perera", "gazetteMatch": "Perera W.A.", "score": 100}]}"#;
/// let records = parse_match_response(body).unwrap().unwrap();
/// assert_eq!(records.len(), 1);
/// ```
pub fn parse_match_response(body: &str) -> Result<Option<Vec<MatchRecord>>> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("ボディがJSONではありません: {}", e)))?;

    let matched = match value.get("matched") {
        Some(Value::Array(items)) if !items.is_empty() => items,
        // 欠落・空・配列以外は「一致なし」
        _ => return Ok(None),
    };

    let mut records = Vec::with_capacity(matched.len());
    for (index, item) in matched.iter().enumerate() {
        let record: MatchRecord = serde_json::from_value(item.clone())
            .map_err(|_| Error::Parse(format!("matched[{}] がオブジェクトではありません", index)))?;

        // score は常に数値で存在する（不変条件）
        if record.score().is_none() {
            return Err(Error::Parse(format!(
                "matched[{}] に数値の {} がありません",
                index, SCORE_FIELD
            )));
        }

        records.push(record);
    }

    Ok(Some(records))
}
