use thiserror::Error;

#[derive(Error, Debug)]
pub enum GazetteMatchError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("Excelファイルが不正です: {0}（.xlsx を指定してください）")]
    InvalidExcelFile(String),

    #[error("PDFファイルが不正です: {0}（.pdf を指定してください）")]
    InvalidPdfFile(String),

    #[error("照合リクエストが実行中です")]
    SubmitInFlight,

    #[error("リクエスト構築エラー: {0}")]
    RequestBuild(String),

    #[error("照合リクエストエラー: {0}")]
    MatchRequest(String),

    #[error("Excel読み込みエラー: {0}")]
    ExcelRead(String),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GazetteMatchError>;
