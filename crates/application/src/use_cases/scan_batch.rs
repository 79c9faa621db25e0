use crate::ports::ReportSink;
use crate::use_cases::ResolveDomainUseCase;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;
use tracing::{debug, info};
use v6ready_domain::{DomainError, ScanMode};

/// Reads domain names line by line and resolves them through a fixed
/// pool of workers, emitting one report line per domain according to
/// the active [`ScanMode`].
///
/// The queue between the reader and the workers is bounded to the
/// worker count, so the reader blocks instead of buffering the input
/// unboundedly. `execute` returns once the input is exhausted and every
/// worker has drained the queue and exited; there is no mid-run abort.
pub struct ScanBatchUseCase {
    resolve: Arc<ResolveDomainUseCase>,
    report: Arc<dyn ReportSink>,
    workers: usize,
}

impl ScanBatchUseCase {
    /// `workers` must be at least 1; config validation enforces this
    /// before the use case is built.
    pub fn new(
        resolve: Arc<ResolveDomainUseCase>,
        report: Arc<dyn ReportSink>,
        workers: usize,
    ) -> Self {
        Self {
            resolve,
            report,
            workers,
        }
    }

    /// Returns the number of domains queued for processing.
    pub async fn execute<R>(&self, input: R, mode: ScanMode) -> Result<u64, DomainError>
    where
        R: AsyncBufRead + Unpin,
    {
        let (tx, rx) = mpsc::channel::<String>(self.workers);
        let rx = Arc::new(Mutex::new(rx));

        let mut pool = JoinSet::new();
        for worker in 0..self.workers {
            let rx = Arc::clone(&rx);
            let resolve = Arc::clone(&self.resolve);
            let report = Arc::clone(&self.report);
            pool.spawn(async move {
                loop {
                    // Hold the lock only while dequeueing, not while
                    // resolving, or the pool degrades to one worker.
                    let next = { rx.lock().await.recv().await };
                    let Some(domain) = next else { break };
                    debug!(worker, domain = %domain, "checking domain");
                    let outcome = resolve.execute(&domain).await;
                    if let Some(line) = mode.report(&domain, &outcome) {
                        report.emit(&line);
                    }
                }
            });
        }

        let mut lines = input.lines();
        let mut queued = 0u64;
        loop {
            let line = lines
                .next_line()
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;
            let Some(line) = line else { break };
            let domain = line.trim();
            if domain.is_empty() {
                continue;
            }
            queued += 1;
            if tx.send(domain.to_string()).await.is_err() {
                break;
            }
        }
        drop(tx);

        while pool.join_next().await.is_some() {}
        info!(domains = queued, workers = self.workers, "batch scan finished");
        Ok(queued)
    }
}
