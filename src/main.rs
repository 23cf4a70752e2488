use clap::Parser;
use gazette_match_rust::{
    cli, client, config, error, export, interactive, names, renderer, result_file, session,
    validator,
};

use cli::{Cli, Commands};
use config::Config;
use error::{GazetteMatchError, Result};
use gazette_match_common::MatchOutcome;
use indicatif::ProgressBar;
use result_file::MatchResultFile;
use session::MatchSession;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Match { excel, pdf, threshold, output, interactive } => {
            println!("📋 gazette-match - 名簿照合\n");

            // 1. 入力検証（不正ならネットワークに到達しない）
            println!("[1/3] 入力ファイルを検証中...");
            validator::validate_inputs(&excel, &pdf)?;
            if cli.verbose {
                if let Ok(name_list) = names::read_name_column(&excel) {
                    println!("  名簿: {}件", name_list.len());
                }
            }
            println!("✔ 検証OK\n");

            // 2. 照合リクエスト
            println!("[2/3] 照合リクエスト送信中...");
            let session =
                run_match_loop(&config, &excel, &pdf, threshold, interactive, cli.verbose).await?;

            if !session.current_records().is_empty() {
                println!("✅ 照合結果:");
                renderer::print_match_table(session.current_records());
                println!();
            }

            // 3. 結果保存
            println!("[3/3] 結果を保存中...");
            let output_path = output.unwrap_or_else(|| PathBuf::from("matches.json"));
            let result =
                MatchResultFile::new(session.threshold(), session.current_records().to_vec());
            result.save(&output_path)?;
            println!("✔ 結果を保存: {}", output_path.display());

            println!("\n✅ 照合完了");
        }

        Commands::Export { input, output } => {
            println!("📄 gazette-match - エクスポート\n");

            if !input.exists() {
                return Err(GazetteMatchError::FileNotFound(input.display().to_string()));
            }
            let result = MatchResultFile::load(&input)?;

            if result.matched.is_empty() {
                println!("出力するレコードがありません: {}", input.display());
                return Ok(());
            }

            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_records(&result.matched, &output_dir)?;

            println!("\n✅ エクスポート完了");
        }

        Commands::Run { excel, pdf, threshold, output, interactive } => {
            println!("🚀 gazette-match - 一括処理\n");

            // 1. Validate
            println!("[1/3] 入力ファイルを検証中...");
            validator::validate_inputs(&excel, &pdf)?;
            println!("✔ 検証OK\n");

            // 2. Match
            println!("[2/3] 照合リクエスト送信中...");
            let session =
                run_match_loop(&config, &excel, &pdf, threshold, interactive, cli.verbose).await?;

            if session.current_records().is_empty() {
                println!("\nエクスポートする一致はありません");
                return Ok(());
            }

            println!("✅ 照合結果:");
            renderer::print_match_table(session.current_records());
            println!();

            // 3. Export
            println!("[3/3] エクスポート中...");
            let output_dir = output.unwrap_or_else(|| PathBuf::from("."));
            export::export_records(session.current_records(), &output_dir)?;

            println!("\n✅ 完了");
        }

        Commands::Peek { excel, limit } => {
            println!("👀 gazette-match - 名簿プレビュー\n");

            if !validator::is_valid_file_type(&excel, validator::EXCEL_ALLOWED_TYPES) {
                return Err(GazetteMatchError::InvalidExcelFile(
                    excel.display().to_string(),
                ));
            }

            let name_list = names::read_name_column(&excel)?;
            println!("名簿: {}件", name_list.len());
            for (index, name) in name_list.iter().take(limit).enumerate() {
                println!("  {:>3}. {}", index + 1, name);
            }
            if name_list.len() > limit {
                println!("  ... 他{}件", name_list.len() - limit);
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = config;

            if let Some(url) = set_endpoint {
                config.set_endpoint(url)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint());
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

/// 照合リクエストのループ
///
/// 1周 = begin_submit → POST1回 → 結果反映。対話モードでは
/// 一致なしのときしきい値を下げて次の周回に入れる。
/// 通信失敗は再試行せずエラーで抜ける（セッションはクリア済み）。
async fn run_match_loop(
    config: &Config,
    excel: &Path,
    pdf: &Path,
    threshold: u8,
    interactive_retry: bool,
    verbose: bool,
) -> Result<MatchSession> {
    let mut session = MatchSession::new();
    session.set_files(excel.to_path_buf(), pdf.to_path_buf());
    session.set_threshold(threshold);

    loop {
        session.begin_submit()?;

        if verbose {
            let url = client::build_match_url(&config.endpoint(), session.threshold());
            println!("  POST {}", url);
        }

        let spinner = ProgressBar::new_spinner();
        spinner.set_message(format!("照合中... (しきい値: {})", session.threshold()));
        spinner.enable_steady_tick(Duration::from_millis(120));

        let outcome = client::submit(config, excel, pdf, session.threshold()).await;
        spinner.finish_and_clear();
        let outcome = outcome?;

        session.apply_outcome(&outcome);

        match outcome {
            MatchOutcome::Matched(records) => {
                println!("✔ {}件の一致\n", records.len());
                return Ok(session);
            }
            MatchOutcome::NoMatch => {
                println!(
                    "一致する名前は見つかりませんでした (しきい値: {})",
                    session.threshold()
                );
                if interactive_retry {
                    if let Some(next) = interactive::prompt_retry_threshold(session.threshold())? {
                        session.set_threshold(next);
                        println!();
                        continue;
                    }
                }
                return Ok(session);
            }
            MatchOutcome::TransportFailure(detail) => {
                return Err(GazetteMatchError::MatchRequest(detail));
            }
        }
    }
}
