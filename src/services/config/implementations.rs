// 設定管理の具象実装

use crate::core::{DelayRange, PoolConfig, PoolError, PoolResult};

/// デフォルトの入力サイズ（値は 0..50）
pub const DEFAULT_INPUT_SIZE: usize = 50;

/// デフォルト設定実装
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultPoolConfig {
    worker_count: usize,
    input_size: usize,
    delay_range: DelayRange,
    seed: Option<u64>,
}

impl DefaultPoolConfig {
    /// 指定したCPU数をワーカー数として設定を作成
    pub fn new(cpu_count: usize) -> Self {
        Self {
            worker_count: cpu_count,
            input_size: DEFAULT_INPUT_SIZE,
            delay_range: DelayRange::default(),
            seed: None,
        }
    }

    /// 遅延なしのテスト用設定
    pub fn testing() -> Self {
        Self::default().without_delay()
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_input_size(mut self, input_size: usize) -> Self {
        self.input_size = input_size;
        self
    }

    pub fn with_delay_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.delay_range = DelayRange::new(min_ms, max_ms);
        self
    }

    pub fn without_delay(mut self) -> Self {
        self.delay_range = DelayRange::zero();
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// 設定の妥当性を検証
    pub fn validate(&self) -> PoolResult<()> {
        validate_config(self)
    }
}

impl Default for DefaultPoolConfig {
    fn default() -> Self {
        Self::new(num_cpus::get())
    }
}

impl PoolConfig for DefaultPoolConfig {
    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn input_size(&self) -> usize {
        self.input_size
    }

    fn delay_range(&self) -> DelayRange {
        self.delay_range
    }

    fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// 任意の `PoolConfig` 実装を検証
pub fn validate_config<C: PoolConfig + ?Sized>(config: &C) -> PoolResult<()> {
    let range = config.delay_range();
    if !range.is_valid() {
        return Err(PoolError::configuration(format!(
            "遅延範囲の下限 {}ms が上限 {}ms を超えています",
            range.min_ms, range.max_ms
        )));
    }
    Ok(())
}
