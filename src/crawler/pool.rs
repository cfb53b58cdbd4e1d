//! Bounded worker pool
//!
//! A fixed set of tokio workers pulls jobs from one bounded channel and sends
//! results to a single collector task. The collector is the only writer of the
//! result slots, and each job carries its input index so results come back in
//! input order.
//!
//! Lifecycle of one [`WorkerPool::run`] call:
//!
//! 1. Spawn the collector, then exactly `workers` workers
//! 2. Send every URL as a job and close the job channel
//! 3. Workers run the task for each job until the channel is drained
//! 4. Join the workers, close the result channel, await the collector
//!
//! The pool is single use per batch; nothing outlives `run`.

use crate::crawler::fetcher::FailureKind;
use crate::crawler::task::ScrapeResult;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

/// Progress is logged every this many collected results
const PROGRESS_INTERVAL: usize = 10;

/// A URL in transit through the pool
#[derive(Debug)]
struct Job {
    /// Position of the URL in the input
    index: usize,

    /// The URL to process
    url: String,
}

type JobReceiver = Arc<Mutex<mpsc::Receiver<Job>>>;

/// Fixed-size pool of concurrent workers
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    workers: usize,
}

impl WorkerPool {
    /// Creates a pool that runs `workers` tasks concurrently
    ///
    /// Returns `None` for a pool of zero workers, which could never drain its
    /// queue.
    pub fn new(workers: usize) -> Option<Self> {
        (workers >= 1).then_some(Self { workers })
    }

    /// Number of concurrent workers
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs `task` once per URL and returns one result per URL in input order
    ///
    /// At most `workers` invocations of `task` are in flight at any moment.
    /// Each invocation runs in its own spawned task, so a panic is reported as
    /// a failed result instead of taking the worker down.
    pub async fn run<F, Fut>(&self, urls: Vec<String>, task: F) -> Vec<ScrapeResult>
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ScrapeResult> + Send + 'static,
    {
        let total = urls.len();
        if total == 0 {
            return Vec::new();
        }

        let (job_tx, job_rx) = mpsc::channel::<Job>(total);
        let (result_tx, result_rx) = mpsc::channel::<(usize, ScrapeResult)>(total);
        let job_rx: JobReceiver = Arc::new(Mutex::new(job_rx));
        let task = Arc::new(task);

        // Collector first, so results drain while jobs are still being sent
        let collector = tokio::spawn(collect(result_rx, total));

        let worker_count = self.workers.min(total);
        tracing::debug!("Starting {} workers for {} URLs", worker_count, total);

        let mut workers = JoinSet::new();
        for id in 0..worker_count {
            workers.spawn(worker(
                id,
                Arc::clone(&job_rx),
                result_tx.clone(),
                Arc::clone(&task),
            ));
        }

        for (index, url) in urls.iter().enumerate() {
            let job = Job {
                index,
                url: url.clone(),
            };
            if job_tx.send(job).await.is_err() {
                tracing::warn!(
                    "All workers exited early; {} jobs were not dispatched",
                    total - index
                );
                break;
            }
        }
        drop(job_tx);

        while let Some(joined) = workers.join_next().await {
            if let Err(e) = joined {
                tracing::warn!("Worker aborted: {}", e);
            }
        }
        drop(result_tx);

        let slots = match collector.await {
            Ok(slots) => slots,
            Err(e) => {
                tracing::error!("Result collector aborted: {}", e);
                Vec::new()
            }
        };

        fill_missing(urls, slots)
    }
}

/// Worker loop: take a job, run it, send the result, repeat until closed
async fn worker<F, Fut>(
    id: usize,
    jobs: JobReceiver,
    results: mpsc::Sender<(usize, ScrapeResult)>,
    task: Arc<F>,
) where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ScrapeResult> + Send + 'static,
{
    tracing::trace!("Worker {} started", id);
    let mut processed = 0usize;

    loop {
        // Lock only long enough to take one job
        let job = { jobs.lock().await.recv().await };
        let Some(Job { index, url }) = job else {
            break;
        };

        let result = match tokio::spawn((*task)(url.clone())).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!("Task for {} aborted: {}", url, e);
                ScrapeResult::failure(url, FailureKind::Aborted, format!("task aborted: {}", e))
            }
        };

        processed += 1;
        if results.send((index, result)).await.is_err() {
            tracing::warn!("Worker {}: result collector is gone", id);
            break;
        }
    }

    tracing::trace!("Worker {} finished after {} jobs", id, processed);
}

/// Drains the result channel into index-addressed slots
async fn collect(
    mut results: mpsc::Receiver<(usize, ScrapeResult)>,
    total: usize,
) -> Vec<Option<ScrapeResult>> {
    let mut slots: Vec<Option<ScrapeResult>> = (0..total).map(|_| None).collect();
    let mut received = 0usize;
    let mut failed = 0usize;

    while let Some((index, result)) = results.recv().await {
        received += 1;
        if result.is_error() {
            failed += 1;
        }

        match slots.get_mut(index) {
            Some(slot) if slot.is_none() => *slot = Some(result),
            Some(_) => tracing::warn!("Duplicate result for {}, keeping the first", result.url),
            None => tracing::warn!("Result index {} out of range", index),
        }

        if received % PROGRESS_INTERVAL == 0 {
            tracing::info!(
                "Progress: {}/{} URLs done ({} failed)",
                received,
                total,
                failed
            );
        }
    }

    slots
}

/// Pairs slots with their URLs, turning any empty slot into a failed result
fn fill_missing(urls: Vec<String>, slots: Vec<Option<ScrapeResult>>) -> Vec<ScrapeResult> {
    let mut slots = slots.into_iter();

    urls.into_iter()
        .map(|url| match slots.next().flatten() {
            Some(result) => result,
            None => ScrapeResult::failure(
                url,
                FailureKind::Aborted,
                "no result produced: worker aborted",
            ),
        })
        .collect()
}
