// Worker - 共有キューを排出する単一ワーカー
//
// Fetching → Processing → Fetching (ループ) → Terminated
// キューと出力コレクションのロックは同時に保持せず、遅延中も保持しない。

use crate::{
    core::{
        DelayRange, PoolError, PoolResult, ProgressReporter, Transform, WorkerId, WorkerState,
        WorkerStats,
    },
    services::{InputQueue, OutputCollection, SimulatedDelay},
};
use std::sync::Arc;
use tracing::{debug, error};

/// ワーカー内部のステップ（処理中のアイテムを保持する）
#[derive(Debug, Clone, Copy)]
enum Step {
    Fetching,
    Processing(i64),
    Terminated,
}

impl Step {
    fn state(&self) -> WorkerState {
        match self {
            Self::Fetching => WorkerState::Fetching,
            Self::Processing(_) => WorkerState::Processing,
            Self::Terminated => WorkerState::Terminated,
        }
    }
}

/// ワーカーのメインループ
///
/// 共有ハンドルが欠けている場合は、どの共有リソースにも触れる前に
/// `PoolError::InvalidArgument` で即座に失敗する。
pub async fn run_worker<T, R>(
    worker_id: WorkerId,
    queue: Option<InputQueue>,
    output: Option<OutputCollection>,
    transform: Arc<T>,
    reporter: Arc<R>,
    mut delay: SimulatedDelay,
) -> PoolResult<WorkerStats>
where
    T: Transform + ?Sized,
    R: ProgressReporter + ?Sized,
{
    let name = worker_id.to_string();

    let (queue, output) = match (queue, output) {
        (Some(queue), Some(output)) => (queue, output),
        (queue, _) => {
            let missing = if queue.is_none() {
                "input_queue"
            } else {
                "output_collection"
            };
            let err = PoolError::invalid_argument(missing);
            error!(worker = %name, "{err}");
            reporter.report_error(&name, &err.to_string()).await;
            return Err(err);
        }
    };

    let mut processed = 0;
    let mut step = Step::Fetching;
    reporter.report_state(&name, step.state()).await;

    loop {
        let next = match step {
            Step::Fetching => match queue.dequeue()? {
                Some(item) => Step::Processing(item),
                None => Step::Terminated,
            },
            Step::Processing(item) => {
                let result = transform.apply(item);
                let waited = delay.wait().await;
                output.push(result)?;
                processed += 1;

                debug!(
                    worker = %name,
                    input = item,
                    output = result,
                    waited_ms = waited.as_millis() as u64,
                    "item processed"
                );
                reporter.report_item(&name, item, result).await;
                Step::Fetching
            }
            Step::Terminated => break,
        };

        debug_assert!(step.state().can_transition_to(next.state()));
        step = next;
        reporter.report_state(&name, step.state()).await;
    }

    debug!(worker = %name, processed, "worker terminated");
    Ok(WorkerStats {
        worker: name,
        processed,
    })
}

/// 単一ワーカーを起動
pub fn spawn_single_worker<T, R>(
    worker_id: WorkerId,
    queue: InputQueue,
    output: OutputCollection,
    transform: Arc<T>,
    reporter: Arc<R>,
    delay: SimulatedDelay,
) -> tokio::task::JoinHandle<PoolResult<WorkerStats>>
where
    T: Transform + ?Sized + 'static,
    R: ProgressReporter + ?Sized + 'static,
{
    tokio::spawn(run_worker(
        worker_id,
        Some(queue),
        Some(output),
        transform,
        reporter,
        delay,
    ))
}

/// Workers: 同じキューと出力コレクションを共有するワーカー群を起動
pub fn spawn_workers<T, R>(
    worker_count: usize,
    queue: &InputQueue,
    output: &OutputCollection,
    transform: &Arc<T>,
    reporter: &Arc<R>,
    delay_range: DelayRange,
    seed: Option<u64>,
) -> Vec<tokio::task::JoinHandle<PoolResult<WorkerStats>>>
where
    T: Transform + ?Sized + 'static,
    R: ProgressReporter + ?Sized + 'static,
{
    (0..worker_count)
        .map(|index| {
            let worker_id = WorkerId(index);
            spawn_single_worker(
                worker_id,
                queue.clone(),
                output.clone(),
                Arc::clone(transform),
                Arc::clone(reporter),
                SimulatedDelay::for_worker(delay_range, seed, worker_id),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::traits::MockTransform;
    use crate::services::{Doubling, NoOpProgressReporter, RecordingProgressReporter};
    use std::time::Duration;

    fn no_delay() -> SimulatedDelay {
        SimulatedDelay::new(DelayRange::zero(), Some(0))
    }

    #[tokio::test]
    async fn test_single_worker_drains_queue() {
        let queue = InputQueue::from_items(0..5);
        let output = OutputCollection::new();

        let stats = run_worker(
            WorkerId(0),
            Some(queue.clone()),
            Some(output.clone()),
            Arc::new(Doubling),
            Arc::new(NoOpProgressReporter::new()),
            no_delay(),
        )
        .await
        .unwrap();

        assert_eq!(stats.worker, "worker-0");
        assert_eq!(stats.processed, 5);
        assert!(queue.is_empty().unwrap());
        // 単一ワーカーなら挿入順は取り出し順と一致する
        assert_eq!(output.snapshot().unwrap(), vec![0, 2, 4, 6, 8]);
    }

    #[tokio::test]
    async fn test_worker_reports_state_machine() {
        let reporter = Arc::new(RecordingProgressReporter::new());

        run_worker(
            WorkerId(3),
            Some(InputQueue::from_items(vec![10, 20])),
            Some(OutputCollection::new()),
            Arc::new(Doubling),
            Arc::clone(&reporter),
            no_delay(),
        )
        .await
        .unwrap();

        use WorkerState::*;
        assert_eq!(
            reporter.states_of("worker-3"),
            vec![Fetching, Processing, Fetching, Processing, Fetching, Terminated]
        );
        assert_eq!(reporter.item_count(), 2);
    }

    #[tokio::test]
    async fn test_worker_on_empty_queue_terminates_immediately() {
        let reporter = Arc::new(RecordingProgressReporter::new());
        let output = OutputCollection::new();

        let stats = run_worker(
            WorkerId(0),
            Some(InputQueue::new()),
            Some(output.clone()),
            Arc::new(Doubling),
            Arc::clone(&reporter),
            no_delay(),
        )
        .await
        .unwrap();

        assert_eq!(stats.processed, 0);
        assert!(output.is_empty().unwrap());
        assert_eq!(
            reporter.states_of("worker-0"),
            vec![WorkerState::Fetching, WorkerState::Terminated]
        );
    }

    #[tokio::test]
    async fn test_missing_queue_fails_fast() {
        let reporter = Arc::new(RecordingProgressReporter::new());
        let output = OutputCollection::new();
        output.push(99).unwrap();

        let error = run_worker(
            WorkerId(1),
            None,
            Some(output.clone()),
            Arc::new(Doubling),
            Arc::clone(&reporter),
            no_delay(),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, PoolError::InvalidArgument { ref argument } if argument == "input_queue"));
        assert_eq!(output.snapshot().unwrap(), vec![99]);
        assert_eq!(reporter.errors().len(), 1);
        assert_eq!(reporter.errors()[0].0, "worker-1");
        assert!(reporter.states_of("worker-1").is_empty());
    }

    #[tokio::test]
    async fn test_missing_output_fails_fast_without_dequeue() {
        let queue = InputQueue::from_items(0..5);

        let error = run_worker(
            WorkerId(0),
            Some(queue.clone()),
            None,
            Arc::new(Doubling),
            Arc::new(NoOpProgressReporter::new()),
            no_delay(),
        )
        .await
        .unwrap_err();

        assert!(matches!(error, PoolError::InvalidArgument { ref argument } if argument == "output_collection"));
        assert_eq!(queue.snapshot().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_transform_applied_once_per_item() {
        let mut transform = MockTransform::new();
        transform
            .expect_apply()
            .times(3)
            .returning(|value| value * 10);
        let output = OutputCollection::new();

        run_worker(
            WorkerId(0),
            Some(InputQueue::from_items(1..=3)),
            Some(output.clone()),
            Arc::new(transform),
            Arc::new(NoOpProgressReporter::new()),
            no_delay(),
        )
        .await
        .unwrap();

        assert_eq!(output.sort_results().unwrap(), vec![10, 20, 30]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_item_leaves_queue_before_delay() {
        let queue = InputQueue::from_items(vec![4]);
        let output = OutputCollection::new();

        let handle = spawn_single_worker(
            WorkerId(0),
            queue.clone(),
            output.clone(),
            Arc::new(Doubling),
            Arc::new(NoOpProgressReporter::new()),
            SimulatedDelay::new(DelayRange::new(300, 300), None),
        );

        tokio::time::sleep(Duration::from_millis(50)).await;
        // 遅延中: キューからは取り出し済み、出力にはまだ追加されていない
        assert!(queue.is_empty().unwrap());
        assert!(output.is_empty().unwrap());

        let stats = handle.await.unwrap().unwrap();
        assert_eq!(stats.processed, 1);
        assert_eq!(output.snapshot().unwrap(), vec![8]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_spawn_workers_share_state() {
        let queue = InputQueue::from_items(0..200);
        let output = OutputCollection::new();
        let transform = Arc::new(Doubling);
        let reporter = Arc::new(NoOpProgressReporter::new());

        let handles = spawn_workers(
            4,
            &queue,
            &output,
            &transform,
            &reporter,
            DelayRange::zero(),
            Some(1),
        );
        assert_eq!(handles.len(), 4);

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap().unwrap().processed;
        }

        let expected: Vec<i64> = (0..200).map(|x| x * 2).collect();
        assert_eq!(total, 200);
        assert_eq!(output.sort_results().unwrap(), expected);
    }

    #[tokio::test]
    async fn test_spawn_zero_workers() {
        let handles = spawn_workers(
            0,
            &InputQueue::from_items(0..3),
            &OutputCollection::new(),
            &Arc::new(Doubling),
            &Arc::new(NoOpProgressReporter::new()),
            DelayRange::zero(),
            None,
        );

        assert!(handles.is_empty());
    }
}
