// 進捗監視の具象実装

use crate::core::{PoolSummary, ProgressReporter, WorkerState};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// 開始側タスクの名前
pub const MAIN_TASK: &str = "main";

/// コンソール出力による進捗報告実装
///
/// 各行の先頭に出力元タスク名を付ける
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 状態遷移・アイテム単位の出力を抑制（開始・完了・エラーは出力する）
    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, total_items: usize, worker_count: usize) {
        println!("[{MAIN_TASK}] 🚀 Starting {worker_count} workers for {total_items} items...");
    }

    async fn report_state(&self, source: &str, state: WorkerState) {
        if !self.quiet {
            println!("[{source}] state -> {state}");
        }
    }

    async fn report_item(&self, source: &str, input: i64, output: i64) {
        if !self.quiet {
            println!("[{source}] processed {input} -> {output}");
        }
    }

    async fn report_error(&self, source: &str, error: &str) {
        eprintln!("[{source}] ❌ Error: {error}");
    }

    async fn report_completed(&self, summary: &PoolSummary) {
        println!(
            "[{MAIN_TASK}] ✅ All {} workers finished. Processed: {}/{} in {}ms",
            summary.worker_count,
            summary.results.len(),
            summary.input_count,
            summary.elapsed_ms
        );
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _total_items: usize, _worker_count: usize) {
        // 何もしない
    }

    async fn report_state(&self, _source: &str, _state: WorkerState) {
        // 何もしない
    }

    async fn report_item(&self, _source: &str, _input: i64, _output: i64) {
        // 何もしない
    }

    async fn report_error(&self, _source: &str, _error: &str) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &PoolSummary) {
        // 何もしない
    }
}

/// 記録された報告イベント
#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    Started {
        total_items: usize,
        worker_count: usize,
    },
    State {
        source: String,
        state: WorkerState,
    },
    Item {
        source: String,
        input: i64,
        output: i64,
    },
    Error {
        source: String,
        error: String,
    },
    Completed(PoolSummary),
}

/// 呼び出しを順に記録する進捗報告実装（テスト用）
#[derive(Debug, Default, Clone)]
pub struct RecordingProgressReporter {
    events: Arc<Mutex<Vec<ReportEvent>>>,
}

impl RecordingProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&self, event: ReportEvent) {
        // 汚染されていても記録は続ける
        let mut events = self.events.lock().unwrap_or_else(|e| e.into_inner());
        events.push(event);
    }

    /// 記録済みイベントのコピー
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// 指定タスクの状態遷移の履歴
    pub fn states_of(&self, source: &str) -> Vec<WorkerState> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::State { source: s, state } if s == source => Some(state),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<(String, String)> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ReportEvent::Error { source, error } => Some((source, error)),
                _ => None,
            })
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|event| matches!(event, ReportEvent::Item { .. }))
            .count()
    }
}

#[async_trait]
impl ProgressReporter for RecordingProgressReporter {
    async fn report_started(&self, total_items: usize, worker_count: usize) {
        self.record(ReportEvent::Started {
            total_items,
            worker_count,
        });
    }

    async fn report_state(&self, source: &str, state: WorkerState) {
        self.record(ReportEvent::State {
            source: source.to_string(),
            state,
        });
    }

    async fn report_item(&self, source: &str, input: i64, output: i64) {
        self.record(ReportEvent::Item {
            source: source.to_string(),
            input,
            output,
        });
    }

    async fn report_error(&self, source: &str, error: &str) {
        self.record(ReportEvent::Error {
            source: source.to_string(),
            error: error.to_string(),
        });
    }

    async fn report_completed(&self, summary: &PoolSummary) {
        self.record(ReportEvent::Completed(summary.clone()));
    }
}
