// エンジン層 - ワーカープールのオーケストレーション
// サービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod pool;
pub mod worker;

// 公開API - 主要エンジンクラス
pub use api::{create_default_pool, create_quiet_pool, double_in_parallel};
pub use pool::WorkerPool;
pub use worker::{run_worker, spawn_single_worker, spawn_workers};
