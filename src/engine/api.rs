// 高レベルAPI - よく使う構成のプール作成と一発実行ヘルパー

use super::pool::WorkerPool;
use crate::{
    core::{PoolResult, PoolSummary},
    services::{ConsoleProgressReporter, DefaultPoolConfig, Doubling, NoOpProgressReporter},
};

/// デフォルト設定（CPU数のワーカー、500〜3000msの遅延）のプールを作成
pub fn create_default_pool() -> WorkerPool<DefaultPoolConfig, Doubling, ConsoleProgressReporter> {
    WorkerPool::new(
        DefaultPoolConfig::default(),
        Doubling::new(),
        ConsoleProgressReporter::new(),
    )
}

/// 静音版のプールを作成（バックグラウンド処理・テスト用）
pub fn create_quiet_pool(
    config: DefaultPoolConfig,
) -> WorkerPool<DefaultPoolConfig, Doubling, NoOpProgressReporter> {
    WorkerPool::new(config, Doubling::new(), NoOpProgressReporter::new())
}

/// 遅延なし・静音で入力を2倍にし、昇順の結果を返す
pub async fn double_in_parallel(inputs: Vec<i64>, worker_count: usize) -> PoolResult<Vec<i64>> {
    let pool = create_quiet_pool(DefaultPoolConfig::testing().with_worker_count(worker_count));
    let summary: PoolSummary = pool.run(inputs).await?;
    Ok(summary.results)
}
