// 排他制御付きの共有入力キューと出力コレクション
//
// どちらも `Arc<Mutex<..>>` のハンドルで、クローンは同じ実体を共有する。
// ロックは1文の間だけ保持し、`.await` をまたいで保持しない。

use crate::core::{PoolError, PoolResult};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

const INPUT_QUEUE: &str = "input_queue";
const OUTPUT_COLLECTION: &str = "output_collection";

/// 全ワーカーで共有するFIFO入力キュー
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    items: Arc<Mutex<VecDeque<i64>>>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// 元の順序を保ったままキューを構築
    pub fn from_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self {
            items: Arc::new(Mutex::new(items.into_iter().collect())),
        }
    }

    fn lock(&self) -> PoolResult<MutexGuard<'_, VecDeque<i64>>> {
        self.items
            .lock()
            .map_err(|_| PoolError::lock_poisoned(INPUT_QUEUE))
    }

    /// 先頭から1件取り出す。空なら `None`
    pub fn dequeue(&self) -> PoolResult<Option<i64>> {
        Ok(self.lock()?.pop_front())
    }

    pub fn len(&self) -> PoolResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> PoolResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// 現在の内容のコピー（テスト・診断用）
    pub fn snapshot(&self) -> PoolResult<Vec<i64>> {
        Ok(self.lock()?.iter().copied().collect())
    }

    /// 同じキューを指しているかどうか
    pub fn shares_with(&self, other: &InputQueue) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

/// 全ワーカーで共有する出力コレクション
#[derive(Debug, Clone, Default)]
pub struct OutputCollection {
    results: Arc<Mutex<Vec<i64>>>,
}

impl OutputCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 期待件数分の容量を確保して構築
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::with_capacity(capacity))),
        }
    }

    fn lock(&self) -> PoolResult<MutexGuard<'_, Vec<i64>>> {
        self.results
            .lock()
            .map_err(|_| PoolError::lock_poisoned(OUTPUT_COLLECTION))
    }

    /// 結果を1件追加
    pub fn push(&self, value: i64) -> PoolResult<()> {
        self.lock()?.push(value);
        Ok(())
    }

    pub fn len(&self) -> PoolResult<usize> {
        Ok(self.lock()?.len())
    }

    pub fn is_empty(&self) -> PoolResult<bool> {
        Ok(self.lock()?.is_empty())
    }

    /// 現在の内容のコピー（挿入順）
    pub fn snapshot(&self) -> PoolResult<Vec<i64>> {
        Ok(self.lock()?.clone())
    }

    /// 昇順に並べ替えて内容のコピーを返す
    ///
    /// 全ワーカー終了後に開始側が一度だけ呼ぶ
    pub fn sort_results(&self) -> PoolResult<Vec<i64>> {
        let mut results = self.lock()?;
        results.sort_unstable();
        Ok(results.clone())
    }

    pub fn shares_with(&self, other: &OutputCollection) -> bool {
        Arc::ptr_eq(&self.results, &other.results)
    }
}
