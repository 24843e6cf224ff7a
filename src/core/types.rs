// ワーカープールに関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// ワーカーの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(pub usize);

impl WorkerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker-{}", self.0)
    }
}

/// ワーカーの状態
///
/// Fetching → Processing → Fetching (ループ) → Terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkerState {
    Fetching,
    Processing,
    Terminated,
}

impl WorkerState {
    /// 指定した状態へ遷移できるかどうか
    pub fn can_transition_to(&self, next: WorkerState) -> bool {
        matches!(
            (self, next),
            (Self::Fetching, Self::Processing)
                | (Self::Fetching, Self::Terminated)
                | (Self::Processing, Self::Fetching)
        )
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fetching => "fetching",
            Self::Processing => "processing",
            Self::Terminated => "terminated",
        }
    }
}

impl fmt::Display for WorkerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 擬似作業の遅延範囲（ミリ秒、両端を含む）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub const fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// 遅延なし（テスト用）
    pub const fn zero() -> Self {
        Self::new(0, 0)
    }

    pub fn is_zero(&self) -> bool {
        self.max_ms == 0
    }

    pub fn is_valid(&self) -> bool {
        self.min_ms <= self.max_ms
    }
}

impl Default for DelayRange {
    fn default() -> Self {
        Self::new(500, 3000)
    }
}

/// 単一ワーカーの処理統計
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerStats {
    pub worker: String,
    pub processed: usize,
}

/// プール実行全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSummary {
    pub worker_count: usize,
    pub input_count: usize,
    /// 昇順ソート済みの出力
    pub results: Vec<i64>,
    pub worker_stats: Vec<WorkerStats>,
    pub elapsed_ms: u64,
}

impl PoolSummary {
    /// ワーカーなしで即座に終了した場合のサマリー
    pub fn empty(input_count: usize) -> Self {
        Self {
            worker_count: 0,
            input_count,
            results: Vec::new(),
            worker_stats: Vec::new(),
            elapsed_ms: 0,
        }
    }

    /// 全ワーカーが処理したアイテム数の合計
    pub fn total_processed(&self) -> usize {
        self.worker_stats.iter().map(|stats| stats.processed).sum()
    }

    pub fn is_sorted(&self) -> bool {
        self.results.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worker_id_display() {
        assert_eq!(WorkerId(0).to_string(), "worker-0");
        assert_eq!(WorkerId(12).to_string(), "worker-12");
        assert_eq!(WorkerId(3).index(), 3);
    }

    #[test]
    fn test_worker_state_transitions() {
        use WorkerState::*;

        assert!(Fetching.can_transition_to(Processing));
        assert!(Fetching.can_transition_to(Terminated));
        assert!(Processing.can_transition_to(Fetching));

        assert!(!Processing.can_transition_to(Terminated));
        assert!(!Terminated.can_transition_to(Fetching));
        assert!(!Terminated.can_transition_to(Processing));
        assert!(!Fetching.can_transition_to(Fetching));
    }

    #[test]
    fn test_delay_range() {
        let default = DelayRange::default();
        assert_eq!(default, DelayRange::new(500, 3000));
        assert!(default.is_valid());
        assert!(!default.is_zero());

        assert!(DelayRange::zero().is_zero());
        assert!(!DelayRange::new(10, 5).is_valid());
    }

    #[test]
    fn test_pool_summary_helpers() {
        let summary = PoolSummary {
            worker_count: 2,
            input_count: 3,
            results: vec![0, 2, 4],
            worker_stats: vec![
                WorkerStats {
                    worker: "worker-0".to_string(),
                    processed: 2,
                },
                WorkerStats {
                    worker: "worker-1".to_string(),
                    processed: 1,
                },
            ],
            elapsed_ms: 10,
        };

        assert_eq!(summary.total_processed(), 3);
        assert!(summary.is_sorted());

        let empty = PoolSummary::empty(7);
        assert_eq!(empty.input_count, 7);
        assert!(empty.results.is_empty());
        assert_eq!(empty.total_processed(), 0);
    }

    #[test]
    fn test_pool_summary_serializes_to_json() {
        let summary = PoolSummary::empty(0);
        let json = serde_json::to_string(&summary).unwrap();

        assert!(json.contains("\"worker_count\":0"));
        let decoded: PoolSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, summary);
    }
}
