// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod delay;
pub mod monitoring;
pub mod shared;
pub mod transform;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DefaultPoolConfig, DEFAULT_INPUT_SIZE};
pub use delay::SimulatedDelay;
pub use monitoring::{
    ConsoleProgressReporter, NoOpProgressReporter, RecordingProgressReporter, ReportEvent,
};
pub use shared::{InputQueue, OutputCollection};
pub use transform::Doubling;
