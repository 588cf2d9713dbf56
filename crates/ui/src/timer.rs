use std::time::Duration;

use dioxus::prelude::spawn;
use services::{LocalTask, Scheduler};

/// Runs delayed controller work as a task of the component that owns the quiz.
///
/// Tasks die with that component, so leaving the page cancels pending advances.
#[derive(Debug, Clone, Copy, Default)]
pub struct DioxusScheduler;

impl Scheduler for DioxusScheduler {
    fn schedule(&self, delay: Duration, task: LocalTask) {
        spawn(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}
