//! Interval task tied to a guard's lifetime.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Runs a callback every `period` until dropped.
///
/// The first call happens one period after creation. The callback returns
/// `false` to stop early (e.g. the receiving channel is gone).
#[derive(Debug)]
pub struct ScopedInterval {
    handle: JoinHandle<()>,
}

impl ScopedInterval {
    /// Spawn on the current tokio runtime.
    pub fn spawn<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() -> bool + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if !on_tick() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
