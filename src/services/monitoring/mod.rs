// 進捗監視機能
// 状態遷移、処理完了、エラー通知をタスク名付きで報告

pub mod implementations;

// 公開API
pub use implementations::{
    ConsoleProgressReporter, NoOpProgressReporter, RecordingProgressReporter, ReportEvent,
    MAIN_TASK,
};
