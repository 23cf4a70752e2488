//! 照合セッション管理
//!
//! 1セッション分の状態（選択ファイル・しきい値・現在のレコード・
//! 送信状態）を1つの所有値として持つ。レコードの置き換えは常に
//! 全件入れ替えで、返却順をそのまま保持する（ソート・重複排除なし）。
//!
//! 送信状態は Idle → Submitting → Idle の明示的な状態機械。
//! Submitting 中の begin_submit はエラーになり、同時送信は1件に
//! 制限される。

use crate::error::{GazetteMatchError, Result};
use gazette_match_common::{MatchOutcome, MatchRecord, THRESHOLD_DEFAULT};
use std::path::PathBuf;

/// 送信状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
}

/// 照合セッション（メモリ上のみ、永続化しない）
#[derive(Debug)]
pub struct MatchSession {
    excel: Option<PathBuf>,
    pdf: Option<PathBuf>,
    threshold: u8,
    records: Vec<MatchRecord>,
    state: SessionState,
}

impl MatchSession {
    /// 空のセッションを作成
    pub fn new() -> Self {
        Self {
            excel: None,
            pdf: None,
            threshold: THRESHOLD_DEFAULT,
            records: Vec::new(),
            state: SessionState::Idle,
        }
    }

    pub fn set_files(&mut self, excel: PathBuf, pdf: PathBuf) {
        self.excel = Some(excel);
        self.pdf = Some(pdf);
    }

    pub fn excel(&self) -> Option<&PathBuf> {
        self.excel.as_ref()
    }

    pub fn pdf(&self) -> Option<&PathBuf> {
        self.pdf.as_ref()
    }

    pub fn set_threshold(&mut self, threshold: u8) {
        self.threshold = threshold;
    }

    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// 送信中か（送信操作はこの間無効）
    pub fn is_loading(&self) -> bool {
        self.state == SessionState::Submitting
    }

    /// 送信開始。送信中の再入はエラー
    pub fn begin_submit(&mut self) -> Result<()> {
        if self.state == SessionState::Submitting {
            return Err(GazetteMatchError::SubmitInFlight);
        }
        self.state = SessionState::Submitting;
        Ok(())
    }

    /// 照合結果をセッションに反映し、Idleに戻す
    ///
    /// 一致ありは全件入れ替え、一致なし・失敗はクリア。
    pub fn apply_outcome(&mut self, outcome: &MatchOutcome) {
        match outcome {
            MatchOutcome::Matched(records) => self.replace(records.clone()),
            MatchOutcome::NoMatch | MatchOutcome::TransportFailure(_) => self.clear(),
        }
        self.state = SessionState::Idle;
    }

    /// レコードを全件入れ替え（受信順のまま）
    pub fn replace(&mut self, records: Vec<MatchRecord>) {
        self.records = records;
    }

    /// レコードを空にする
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// 現在のレコード（表示・出力の唯一のソース）
    pub fn current_records(&self) -> &[MatchRecord] {
        &self.records
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}
