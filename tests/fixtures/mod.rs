// テストユーティリティ
// 統合テスト間で共有するプール構築ヘルパーと期待値計算
#![allow(dead_code)]

use std::collections::HashMap;
use worker_pool::{
    services::{DefaultPoolConfig, Doubling, NoOpProgressReporter},
    WorkerPool,
};

pub type TestPool = WorkerPool<DefaultPoolConfig, Doubling, NoOpProgressReporter>;

/// 遅延なし・静音のテスト用プール
pub fn testing_pool(workers: usize) -> TestPool {
    WorkerPool::new(
        DefaultPoolConfig::testing().with_worker_count(workers),
        Doubling,
        NoOpProgressReporter::new(),
    )
}

/// 短い遅延付きのテスト用プール（ワーカー間のインターリーブを発生させる）
pub fn jittered_pool(workers: usize, seed: u64) -> TestPool {
    WorkerPool::new(
        DefaultPoolConfig::new(workers)
            .with_delay_range(0, 3)
            .with_seed(seed),
        Doubling,
        NoOpProgressReporter::new(),
    )
}

/// 0..k の入力
pub fn sequential_inputs(k: usize) -> Vec<i64> {
    (0..k as i64).collect()
}

/// 変換後の期待値（昇順）
pub fn expected_doubled(inputs: &[i64]) -> Vec<i64> {
    let mut expected: Vec<i64> = inputs.iter().map(|x| x * 2).collect();
    expected.sort_unstable();
    expected
}

/// 多重集合として比較するための出現回数表
pub fn multiset(values: &[i64]) -> HashMap<i64, usize> {
    let mut counts = HashMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0) += 1;
    }
    counts
}
