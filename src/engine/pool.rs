// WorkerPool - 固定サイズのワーカープールによるキュー排出
// 全ての依存関係をコンストラクタで注入する

use super::worker::spawn_workers;
use crate::{
    core::{PoolConfig, PoolError, PoolResult, PoolSummary, ProgressReporter, Transform},
    services::{config::validate_config, monitoring::MAIN_TASK, InputQueue, OutputCollection},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// 固定サイズのワーカープール
///
/// 入力をキューに積み、N個のワーカーで排出し、全ワーカーの終了を待ってから
/// 出力を昇順に並べて返す。
pub struct WorkerPool<C, T: ?Sized, R: ?Sized> {
    config: C,
    transform: Arc<T>,
    reporter: Arc<R>,
}

impl<C, T, R> WorkerPool<C, T, R>
where
    C: PoolConfig,
    T: Transform + 'static,
    R: ProgressReporter + 'static,
{
    /// 新しいプールを作成
    pub fn new(config: C, transform: T, reporter: R) -> Self {
        Self::from_shared(config, Arc::new(transform), Arc::new(reporter))
    }
}

impl<C, T, R> WorkerPool<C, T, R>
where
    C: PoolConfig,
    T: Transform + ?Sized + 'static,
    R: ProgressReporter + ?Sized + 'static,
{
    /// 共有済みの変換・報告先からプールを作成
    pub fn from_shared(config: C, transform: Arc<T>, reporter: Arc<R>) -> Self {
        Self {
            config,
            transform,
            reporter,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub fn reporter(&self) -> &Arc<R> {
        &self.reporter
    }

    /// デフォルト入力 `0..input_size` でプールを実行
    pub async fn run_default_input(&self) -> PoolResult<PoolSummary> {
        let inputs = (0..self.config.input_size() as i64).collect();
        self.run(inputs).await
    }

    /// 入力を全ワーカーで処理し、昇順ソート済みのサマリーを返す
    pub async fn run(&self, inputs: Vec<i64>) -> PoolResult<PoolSummary> {
        let worker_count = self.config.worker_count();
        let input_count = inputs.len();

        if worker_count == 0 {
            warn!(input_count, "worker count is zero; returning empty output");
            let summary = PoolSummary::empty(input_count);
            self.reporter.report_completed(&summary).await;
            return Ok(summary);
        }

        if let Err(err) = validate_config(&self.config) {
            self.reporter.report_error(MAIN_TASK, &err.to_string()).await;
            return Err(err);
        }

        let start_time = Instant::now();
        info!(worker_count, input_count, "starting worker pool");
        self.reporter.report_started(input_count, worker_count).await;

        // 入力キューを元の順序で構築
        let queue = InputQueue::from_items(inputs);
        let output = OutputCollection::with_capacity(input_count);

        let handles = spawn_workers(
            worker_count,
            &queue,
            &output,
            &self.transform,
            &self.reporter,
            self.config.delay_range(),
            self.config.seed(),
        );

        // 全ワーカーの終了を待つ。失敗があっても残りを待ってから最初のエラーを返す
        let mut worker_stats = Vec::with_capacity(worker_count);
        let mut first_error: Option<PoolError> = None;
        for handle in handles {
            let outcome = handle.await.map_err(PoolError::task).and_then(|result| result);
            match outcome {
                Ok(stats) => worker_stats.push(stats),
                Err(err) => {
                    error!("worker failed: {err}");
                    if first_error.is_none() {
                        first_error = Some(err);
                    }
                }
            }
        }
        if let Some(err) = first_error {
            self.reporter.report_error(MAIN_TASK, &err.to_string()).await;
            return Err(err);
        }

        let results = output.sort_results()?;
        if results.len() != input_count {
            let err = PoolError::conservation_violation(input_count, results.len());
            self.reporter.report_error(MAIN_TASK, &err.to_string()).await;
            return Err(err);
        }

        let summary = PoolSummary {
            worker_count,
            input_count,
            results,
            worker_stats,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };
        info!(
            worker_count,
            processed = summary.total_processed(),
            elapsed_ms = summary.elapsed_ms,
            "worker pool finished"
        );
        self.reporter.report_completed(&summary).await;

        Ok(summary)
    }
}
