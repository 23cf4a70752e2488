use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gazette-match")]
#[command(about = "官報名簿照合ツール（Excel名簿×官報PDF）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名簿と官報PDFを照合してテーブル表示・JSON保存
    Match {
        /// 名簿Excelファイル（.xlsx）
        #[arg(required = true)]
        excel: PathBuf,

        /// 官報PDFファイル
        #[arg(required = true)]
        pdf: PathBuf,

        /// 照合しきい値（80-100、100は完全一致のみ）
        #[arg(short, long, default_value_t = 100,
              value_parser = clap::value_parser!(u8).range(80..=100))]
        threshold: u8,

        /// 出力JSONファイル（デフォルト: matches.json）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 一致なしのとき対話的にしきい値を下げて再照合
        #[arg(short, long)]
        interactive: bool,
    },

    /// 保存済み照合結果JSONからExcelを生成
    Export {
        /// 入力JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル/ディレクトリ（デフォルト: Matched_Deceased_Names.xlsx）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 照合からExcel出力まで一括実行
    Run {
        /// 名簿Excelファイル（.xlsx）
        #[arg(required = true)]
        excel: PathBuf,

        /// 官報PDFファイル
        #[arg(required = true)]
        pdf: PathBuf,

        /// 照合しきい値（80-100、100は完全一致のみ）
        #[arg(short, long, default_value_t = 100,
              value_parser = clap::value_parser!(u8).range(80..=100))]
        threshold: u8,

        /// 出力ファイル/ディレクトリ（デフォルト: カレントディレクトリ）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 一致なしのとき対話的にしきい値を下げて再照合
        #[arg(short, long)]
        interactive: bool,
    },

    /// 名簿Excelの内容をプレビュー
    Peek {
        /// 名簿Excelファイル（.xlsx）
        #[arg(required = true)]
        excel: PathBuf,

        /// 表示する最大行数
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// 設定を表示/編集
    Config {
        /// 照合エンドポイントURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
