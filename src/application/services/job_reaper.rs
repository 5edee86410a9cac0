use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::JobExecutor;

use super::job_tracker::JobTracker;

/// Periodically drops job records whose TTL has passed.
pub struct JobReaper<E: JobExecutor> {
    tracker: Arc<JobTracker<E>>,
    interval: Duration,
}

impl<E: JobExecutor> JobReaper<E> {
    pub fn new(tracker: Arc<JobTracker<E>>, interval: Duration) -> Self {
        Self { tracker, interval }
    }

    pub async fn run(self) {
        tracing::info!(interval_secs = self.interval.as_secs(), "Job reaper started");
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            self.sweep().await;
        }
    }

    pub async fn sweep(&self) -> usize {
        match self.tracker.evict_expired().await {
            Ok(0) => 0,
            Ok(evicted) => {
                tracing::debug!(evicted, "Evicted expired jobs");
                evicted
            }
            Err(e) => {
                tracing::error!(error = %e, "Job eviction failed");
                0
            }
        }
    }
}
