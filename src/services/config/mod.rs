// 設定管理機能
// ワーカー数、入力サイズ、擬似作業の遅延範囲、乱数シード

pub mod implementations;

// 公開API
pub use implementations::{validate_config, DefaultPoolConfig, DEFAULT_INPUT_SIZE};
