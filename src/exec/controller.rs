// src/exec/controller.rs

//! Bounded-parallelism launch loop.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, error, info, trace};

use crate::delay::DelayGenerator;
use crate::errors::{NtimesError, Result};
use crate::exec::backend::Invoker;

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    /// Invocations started by the launch loop.
    pub launched: usize,
    /// Invocations that finished successfully.
    pub succeeded: usize,
    /// Wall-clock time from the first launch to the last completion.
    pub elapsed: Duration,
}

/// Executes `count` invocations with at most `parallelism` running at once.
///
/// Launch attempts are paced by the delay generator: after each task is
/// *started* (not after it acquires a gate slot or finishes) the loop asks
/// the generator for the next pause and sleeps for it. Tasks waiting for a
/// slot keep waiting during that pause; the pause only holds back the
/// launching sequence.
///
/// The first failure observed aborts every other task (children are killed
/// on drop), stops further launches and is returned as the run's error.
pub struct Controller<I: Invoker> {
    parallelism: NonZeroUsize,
    invoker: Arc<I>,
}

impl<I: Invoker> Controller<I> {
    pub fn new(parallelism: NonZeroUsize, invoker: I) -> Self {
        Self {
            parallelism,
            invoker: Arc::new(invoker),
        }
    }

    /// Drive the whole run to completion.
    pub async fn run<D>(&self, count: usize, delay: &mut D) -> Result<RunReport>
    where
        D: DelayGenerator + ?Sized,
    {
        let started = Instant::now();
        let gate = Arc::new(Semaphore::new(
            self.parallelism.get().min(Semaphore::MAX_PERMITS),
        ));
        let mut tasks: JoinSet<Result<usize>> = JoinSet::new();
        let mut progress = Progress::default();

        info!(count, parallelism = self.parallelism.get(), "starting run");

        let outcome = match self
            .launch_all(count, delay, &gate, &mut tasks, &mut progress)
            .await
        {
            Ok(()) => wait_all(&mut tasks, &mut progress).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &outcome {
            error!(
                error = %err,
                launched = progress.launched,
                succeeded = progress.succeeded,
                "invocation failed; aborting remaining invocations"
            );
            tasks.shutdown().await;
        }

        gate.close();

        outcome.map(|()| {
            let report = RunReport {
                launched: progress.launched,
                succeeded: progress.succeeded,
                elapsed: started.elapsed(),
            };
            info!(
                launched = report.launched,
                succeeded = report.succeeded,
                elapsed_ms = report.elapsed.as_millis() as u64,
                "run complete"
            );
            report
        })
    }

    async fn launch_all<D>(
        &self,
        count: usize,
        delay: &mut D,
        gate: &Arc<Semaphore>,
        tasks: &mut JoinSet<Result<usize>>,
        progress: &mut Progress,
    ) -> Result<()>
    where
        D: DelayGenerator + ?Sized,
    {
        for index in 0..count {
            let gate = Arc::clone(gate);
            let invoker = Arc::clone(&self.invoker);

            tasks.spawn(async move {
                // Held until the invocation future resolves, success or not.
                let _permit = gate.acquire_owned().await.map_err(|_| {
                    NtimesError::Other(anyhow::anyhow!("concurrency gate closed"))
                })?;
                trace!(index, "acquired gate slot");
                invoker.invoke(index).await?;
                Ok(index)
            });
            progress.launched += 1;

            let delay_ms = delay.next_delay_ms();
            debug!(index, delay_ms, "launched invocation");

            if delay_ms == 0 {
                reap_finished(tasks, progress)?;
            } else {
                pause(Duration::from_millis(delay_ms), tasks, progress).await?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Progress {
    launched: usize,
    succeeded: usize,
}

/// Sleep for `duration`, surfacing any task failure that happens meanwhile.
async fn pause(
    duration: Duration,
    tasks: &mut JoinSet<Result<usize>>,
    progress: &mut Progress,
) -> Result<()> {
    let sleep = tokio::time::sleep(duration);
    tokio::pin!(sleep);

    loop {
        tokio::select! {
            _ = &mut sleep => return Ok(()),
            Some(joined) = tasks.join_next() => record(joined, progress)?,
        }
    }
}

/// Collect already-finished tasks without waiting.
fn reap_finished(tasks: &mut JoinSet<Result<usize>>, progress: &mut Progress) -> Result<()> {
    while let Some(joined) = tasks.try_join_next() {
        record(joined, progress)?;
    }
    Ok(())
}

/// Wait for every outstanding task, stopping at the first failure.
async fn wait_all(tasks: &mut JoinSet<Result<usize>>, progress: &mut Progress) -> Result<()> {
    while let Some(joined) = tasks.join_next().await {
        record(joined, progress)?;
    }
    Ok(())
}

fn record(
    joined: std::result::Result<Result<usize>, JoinError>,
    progress: &mut Progress,
) -> Result<()> {
    match joined {
        Ok(Ok(index)) => {
            progress.succeeded += 1;
            trace!(index, "invocation finished");
            Ok(())
        }
        Ok(Err(err)) => Err(err),
        Err(join_err) => Err(NtimesError::TaskPanicked(join_err.to_string())),
    }
}
