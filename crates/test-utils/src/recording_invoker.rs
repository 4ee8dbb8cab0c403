use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use ntimes::errors::NtimesError;
use ntimes::exec::backend::{InvocationFuture, Invoker};

/// What a [`RecordingInvoker`] observed.
#[derive(Debug, Default)]
pub struct InvocationLog {
    active: AtomicUsize,
    max_active: AtomicUsize,
    completed: AtomicUsize,
    starts: Mutex<Vec<(usize, Instant)>>,
}

impl InvocationLog {
    /// Highest number of invocations that were running at the same time.
    pub fn max_active(&self) -> usize {
        self.max_active.load(Ordering::SeqCst)
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Indices in the order their invocations began running.
    pub fn started_indices(&self) -> Vec<usize> {
        self.starts.lock().unwrap().iter().map(|(i, _)| *i).collect()
    }

    pub fn start_times(&self) -> Vec<Instant> {
        self.starts.lock().unwrap().iter().map(|(_, t)| *t).collect()
    }

    pub fn started(&self) -> usize {
        self.starts.lock().unwrap().len()
    }
}

/// A fake invoker that:
/// - records when each invocation starts and how many run at once
/// - "runs" for a fixed `hold` duration
/// - optionally fails a specific invocation index with a non-zero exit.
pub struct RecordingInvoker {
    log: Arc<InvocationLog>,
    hold: Duration,
    fail_on: Option<usize>,
}

impl RecordingInvoker {
    pub fn new(hold: Duration) -> Self {
        Self {
            log: Arc::new(InvocationLog::default()),
            hold,
            fail_on: None,
        }
    }

    pub fn failing_on(mut self, index: usize) -> Self {
        self.fail_on = Some(index);
        self
    }

    pub fn log(&self) -> Arc<InvocationLog> {
        Arc::clone(&self.log)
    }
}

impl Invoker for RecordingInvoker {
    fn invoke(&self, index: usize) -> InvocationFuture {
        let log = Arc::clone(&self.log);
        let hold = self.hold;
        let fail = self.fail_on == Some(index);

        Box::pin(async move {
            log.starts.lock().unwrap().push((index, Instant::now()));
            let now_active = log.active.fetch_add(1, Ordering::SeqCst) + 1;
            log.max_active.fetch_max(now_active, Ordering::SeqCst);

            tokio::time::sleep(hold).await;

            log.active.fetch_sub(1, Ordering::SeqCst);
            log.completed.fetch_add(1, Ordering::SeqCst);

            if fail {
                Err(NtimesError::ExitStatus {
                    index,
                    command: "recording-stub".to_string(),
                    code: Some(1),
                })
            } else {
                Ok(())
            }
        })
    }
}
