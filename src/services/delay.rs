// 擬似作業の遅延
//
// ワーカーごとに独立した乱数源を持ち、共有の乱数源による競合を避ける。

use crate::core::{DelayRange, WorkerId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// ワーカー単位の擬似作業遅延
#[derive(Debug)]
pub struct SimulatedDelay {
    range: DelayRange,
    rng: StdRng,
}

impl SimulatedDelay {
    /// シード指定時は再現可能、未指定ならエントロピーから初期化
    pub fn new(range: DelayRange, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { range, rng }
    }

    /// マスターシードからワーカーごとのシードを分岐して作成
    pub fn for_worker(range: DelayRange, master_seed: Option<u64>, worker_id: WorkerId) -> Self {
        let seed = master_seed.map(|seed| seed.wrapping_add(worker_id.index() as u64));
        Self::new(range, seed)
    }

    pub fn range(&self) -> DelayRange {
        self.range
    }

    /// 次の遅延時間を一様分布から引く
    pub fn next_duration(&mut self) -> Duration {
        if self.range.is_zero() {
            return Duration::ZERO;
        }
        let millis = self.rng.gen_range(self.range.min_ms..=self.range.max_ms);
        Duration::from_millis(millis)
    }

    /// 遅延分だけ現在のタスクを中断し、実際に使った時間を返す
    pub async fn wait(&mut self) -> Duration {
        let duration = self.next_duration();
        if duration.is_zero() {
            // 遅延なしでも他タスクに実行機会を渡す
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(duration).await;
        }
        duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations_stay_in_range() {
        let mut delay = SimulatedDelay::new(DelayRange::new(500, 3000), Some(1));

        for _ in 0..1000 {
            let millis = delay.next_duration().as_millis() as u64;
            assert!((500..=3000).contains(&millis));
        }
    }

    #[test]
    fn test_zero_range_never_sleeps() {
        let mut delay = SimulatedDelay::new(DelayRange::zero(), None);

        assert_eq!(delay.next_duration(), Duration::ZERO);
        assert!(delay.range().is_zero());
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let range = DelayRange::new(0, 10_000);
        let mut first = SimulatedDelay::new(range, Some(42));
        let mut second = SimulatedDelay::new(range, Some(42));

        let a: Vec<Duration> = (0..20).map(|_| first.next_duration()).collect();
        let b: Vec<Duration> = (0..20).map(|_| second.next_duration()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_workers_get_distinct_streams() {
        let range = DelayRange::new(0, 1_000_000);
        let mut worker0 = SimulatedDelay::for_worker(range, Some(7), WorkerId(0));
        let mut worker1 = SimulatedDelay::for_worker(range, Some(7), WorkerId(1));

        let a: Vec<Duration> = (0..10).map(|_| worker0.next_duration()).collect();
        let b: Vec<Duration> = (0..10).map(|_| worker1.next_duration()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_fixed_range_is_exact() {
        let mut delay = SimulatedDelay::new(DelayRange::new(5, 5), None);

        assert_eq!(delay.next_duration(), Duration::from_millis(5));
    }

    #[tokio::test]
    async fn test_wait_sleeps_for_drawn_duration() {
        let mut delay = SimulatedDelay::new(DelayRange::new(5, 20), Some(3));
        let start = tokio::time::Instant::now();

        let waited = delay.wait().await;

        assert!(waited >= Duration::from_millis(5));
        assert!(start.elapsed() >= waited);
    }
}
