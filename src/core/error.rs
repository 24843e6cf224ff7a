// ワーカープール専用のカスタムエラー型定義

use thiserror::Error;

/// ワーカープール固有のエラー型
#[derive(Error, Debug)]
pub enum PoolError {
    #[error("不正な引数: {argument} が指定されていません")]
    InvalidArgument { argument: String },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("ロック汚染エラー: {resource} のロックが汚染されています")]
    LockPoisoned { resource: String },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("保存則違反: 入力 {expected} 件に対して出力 {actual} 件")]
    ConservationViolation { expected: usize, actual: usize },
}

impl PoolError {
    /// 不正引数エラーの作成
    pub fn invalid_argument(argument: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
        }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// ロック汚染エラーの作成
    pub fn lock_poisoned(resource: impl Into<String>) -> Self {
        Self::LockPoisoned {
            resource: resource.into(),
        }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 保存則違反エラーの作成
    pub fn conservation_violation(expected: usize, actual: usize) -> Self {
        Self::ConservationViolation { expected, actual }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArgument { .. } | Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::TaskError { .. } => ErrorSeverity::Medium,
            Self::LockPoisoned { .. } | Self::ConservationViolation { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 再試行は行わないため、呼び出し側が入力を直して再実行できるかどうかのみを示す
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidArgument { .. } | Self::ConfigurationError { .. } => true,
            Self::TaskError { .. } => true,
            Self::LockPoisoned { .. } | Self::ConservationViolation { .. } => false,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 共有状態が信頼できない
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ワーカープール用のResult型
pub type PoolResult<T> = Result<T, PoolError>;
