// ワーカープールのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::{DelayRange, PoolSummary, WorkerState};
use async_trait::async_trait;
use mockall::automock;

/// プール設定を抽象化するトレイト
#[automock]
pub trait PoolConfig: Send + Sync {
    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// デフォルト入力のサイズを取得
    fn input_size(&self) -> usize;

    /// 擬似作業の遅延範囲を取得
    fn delay_range(&self) -> DelayRange;

    /// 擬似乱数のマスターシード（未指定ならエントロピーから生成）
    fn seed(&self) -> Option<u64>;
}

/// 進捗報告の抽象化トレイト
///
/// `source` は出力元タスクの名前（`main`, `worker-0` など）
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// プール開始時の報告
    async fn report_started(&self, total_items: usize, worker_count: usize);

    /// ワーカーの状態遷移の報告
    async fn report_state(&self, source: &str, state: WorkerState);

    /// 1アイテム処理完了の報告
    async fn report_item(&self, source: &str, input: i64, output: i64);

    /// エラー発生時の報告
    async fn report_error(&self, source: &str, error: &str);

    /// プール完了時の報告
    async fn report_completed(&self, summary: &PoolSummary);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, total_items: usize, worker_count: usize) {
        self.as_ref().report_started(total_items, worker_count).await
    }

    async fn report_state(&self, source: &str, state: WorkerState) {
        self.as_ref().report_state(source, state).await
    }

    async fn report_item(&self, source: &str, input: i64, output: i64) {
        self.as_ref().report_item(source, input, output).await
    }

    async fn report_error(&self, source: &str, error: &str) {
        self.as_ref().report_error(source, error).await
    }

    async fn report_completed(&self, summary: &PoolSummary) {
        self.as_ref().report_completed(summary).await
    }
}

/// ワーカーが各アイテムに適用する変換
#[automock]
pub trait Transform: Send + Sync {
    fn apply(&self, value: i64) -> i64;
}
