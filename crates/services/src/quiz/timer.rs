use std::cell::RefCell;
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Work the controller wants run later on the UI's own task queue.
pub type LocalTask = Pin<Box<dyn Future<Output = ()> + 'static>>;

/// Delayed execution on a single-threaded event loop.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: LocalTask);
}

/// Scheduler that only records tasks; tests decide when time "passes".
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<VecDeque<(Duration, LocalTask)>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    #[must_use]
    pub fn pending_delays(&self) -> Vec<Duration> {
        self.queue.borrow().iter().map(|(delay, _)| *delay).collect()
    }

    /// Removes the oldest task without running it.
    pub fn take_next(&self) -> Option<(Duration, LocalTask)> {
        self.queue.borrow_mut().pop_front()
    }

    /// Runs the oldest task to completion and returns the delay it was armed with.
    pub async fn run_next(&self) -> Option<Duration> {
        let (delay, task) = self.take_next()?;
        task.await;
        Some(delay)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: LocalTask) {
        self.queue.borrow_mut().push_back((delay, task));
    }
}
