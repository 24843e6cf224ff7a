// run コマンド - プールを実行して結果を表示

use super::args::Cli;
use crate::{
    core::{PoolSummary, ProgressReporter},
    engine::WorkerPool,
    services::{monitoring::MAIN_TASK, ConsoleProgressReporter, Doubling, NoOpProgressReporter},
};
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

/// 引数に従ってプールを実行し、結果を標準出力に表示
pub async fn execute_run(cli: &Cli) -> Result<PoolSummary> {
    let config = cli.to_config();
    config.validate()?;

    // JSON出力時は標準出力をJSONだけにする
    let reporter: Arc<dyn ProgressReporter> = if cli.json {
        Arc::new(NoOpProgressReporter::new())
    } else if cli.quiet {
        Arc::new(ConsoleProgressReporter::quiet())
    } else {
        Arc::new(ConsoleProgressReporter::new())
    };

    let pool = WorkerPool::from_shared(config, Arc::new(Doubling::new()), reporter);
    let summary = pool
        .run_default_input()
        .await
        .context("ワーカープールの実行に失敗しました")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }

    Ok(summary)
}

/// サマリーをテキストで整形
pub fn render_summary(summary: &PoolSummary) -> String {
    let mut lines = vec![format!(
        "[{MAIN_TASK}] Sorted results ({}): {:?}",
        summary.results.len(),
        summary.results
    )];
    for stats in &summary.worker_stats {
        lines.push(format!(
            "[{MAIN_TASK}] {} processed {} items",
            stats.worker, stats.processed
        ));
    }
    lines.join("\n")
}

/// Enterが押されるまで待機
pub async fn wait_for_acknowledgment() -> Result<()> {
    println!("[{MAIN_TASK}] Press Enter to exit...");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    lines.next_line().await?;
    Ok(())
}
