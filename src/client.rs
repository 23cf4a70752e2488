//! 照合サービスクライアント
//!
//! 名簿ExcelとPDFをmultipart（excel / pdf の2パート）でPOSTし、
//! レスポンスを MatchOutcome に写像する。submitごとにPOSTは1回、
//! 再試行はしない（再送はユーザー操作）。
//!
//! 失敗の区別:
//! - 非2xx・通信エラー・ボディ解析不能 → TransportFailure
//! - 正常応答で matched が欠落・空・配列以外 → NoMatch
//! ローカルのファイル読み込み失敗は送信前なのでErr（outcomeではない）。

use crate::config::Config;
use crate::error::{GazetteMatchError, Result};
use crate::validator;
use gazette_match_common::{parse_match_response, MatchOutcome};
use reqwest::multipart::{Form, Part};
use std::path::Path;
use std::time::Duration;

/// しきい値をクエリパラメータとして付与
///
/// 整数の十進表記をそのまま使う（丸め・切り詰めなし）。
pub fn build_match_url(endpoint: &str, threshold: u8) -> String {
    format!("{}?threshold={}", endpoint, threshold)
}

/// multipartボディを構築（excel / pdf の2パート、生バイト）
pub fn build_match_form(excel: &Path, pdf: &Path) -> Result<Form> {
    Ok(Form::new()
        .part("excel", file_part(excel, validator::EXCEL_MIME)?)
        .part("pdf", file_part(pdf, validator::PDF_MIME)?))
}

fn file_part(path: &Path, mime: &str) -> Result<Part> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(mime)
        .map_err(|e| GazetteMatchError::RequestBuild(format!("MIMEタイプ設定エラー: {}", e)))
}

/// ステータスとボディから MatchOutcome へ写像
///
/// 非2xxはボディの内容にかかわらず TransportFailure。
pub fn outcome_from_response(status: u16, body: &str) -> MatchOutcome {
    if !(200..300).contains(&status) {
        return MatchOutcome::TransportFailure(format!("HTTPステータス {}", status));
    }

    match parse_match_response(body) {
        Ok(Some(records)) => MatchOutcome::Matched(records),
        Ok(None) => MatchOutcome::NoMatch,
        Err(e) => MatchOutcome::TransportFailure(format!("レスポンス解析失敗: {}", e)),
    }
}

/// 照合リクエストを送信
pub async fn submit(
    config: &Config,
    excel: &Path,
    pdf: &Path,
    threshold: u8,
) -> Result<MatchOutcome> {
    let url = build_match_url(&config.endpoint(), threshold);
    let form = build_match_form(excel, pdf)?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(|e| GazetteMatchError::RequestBuild(format!("HTTPクライアント初期化エラー: {}", e)))?;

    let response = match client.post(&url).multipart(form).send().await {
        Ok(res) => res,
        Err(e) => return Ok(MatchOutcome::TransportFailure(format!("通信エラー: {}", e))),
    };

    let status = response.status().as_u16();
    let body = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            return Ok(MatchOutcome::TransportFailure(format!(
                "レスポンス受信エラー: {}",
                e
            )))
        }
    };

    Ok(outcome_from_response(status, &body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_match_url_exact_serialization() {
        // 80-100の全しきい値で str(t) と完全一致
        for t in 80u8..=100 {
            let url = build_match_url("https://example.com/match", t);
            assert_eq!(url, format!("https://example.com/match?threshold={}", t));
        }
    }

    #[test]
    fn test_outcome_matched() {
        let body = r#"{"matched": [
            {"excelName": "Perera", "gazetteMatch": "Perera W.A.", "score": 100},
            {"excelName": "Silva", "gazetteMatch": "Silva K.", "score": 92}
        ]}"#;

        match outcome_from_response(200, body) {
            MatchOutcome::Matched(records) => {
                assert_eq!(records.len(), 2);
                assert_eq!(records[0].display_value("excelName"), "Perera");
                assert_eq!(records[1].score(), Some(92.0));
            }
            other => panic!("Matchedを期待: {:?}", other),
        }
    }

    #[test]
    fn test_outcome_empty_matched_is_no_match() {
        assert_eq!(
            outcome_from_response(200, r#"{"matched": []}"#),
            MatchOutcome::NoMatch
        );
        assert_eq!(
            outcome_from_response(200, r#"{"status": "ok"}"#),
            MatchOutcome::NoMatch
        );
        assert_eq!(
            outcome_from_response(200, r#"{"matched": 42}"#),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn test_outcome_non_success_status_is_failure() {
        // ボディが正しい形でも非2xxはTransportFailure
        let body = r#"{"matched": [{"excelName": "A", "score": 100}]}"#;
        for status in [400u16, 404, 500, 502] {
            match outcome_from_response(status, body) {
                MatchOutcome::TransportFailure(detail) => {
                    assert!(detail.contains(&status.to_string()));
                }
                other => panic!("TransportFailureを期待: {:?}", other),
            }
        }
    }

    #[test]
    fn test_outcome_malformed_body_is_failure() {
        let outcome = outcome_from_response(200, "<html>Bad Gateway</html>");
        assert!(matches!(outcome, MatchOutcome::TransportFailure(_)));
    }

    #[test]
    fn test_build_match_form_missing_file_is_error() {
        // ローカルの読み込み失敗はoutcomeではなくErr（送信前）
        let result = build_match_form(
            Path::new("/nonexistent/names.xlsx"),
            Path::new("/nonexistent/gazette.pdf"),
        );
        assert!(result.is_err());
    }
}
