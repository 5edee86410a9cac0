use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::Instrument;

use crate::application::ports::{JobExecutor, JobStore, StoreError};
use crate::domain::{Job, JobId, JobStatus, JobTransition};

pub const DEFAULT_JOB_TTL: Duration = Duration::from_secs(60 * 60);
pub const DEFAULT_EXECUTION_TIMEOUT: Duration = Duration::from_secs(10 * 60);

#[derive(Debug, Clone, Copy)]
pub struct TrackerConfig {
    pub ttl: chrono::Duration,
    pub execution_timeout: Duration,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            ttl: chrono::Duration::seconds(DEFAULT_JOB_TTL.as_secs() as i64),
            execution_timeout: DEFAULT_EXECUTION_TIMEOUT,
        }
    }
}

/// Snapshot of a job as seen by a status query.
#[derive(Debug, Clone)]
pub struct JobView<R> {
    pub id: JobId,
    pub status: JobStatus,
    pub result: Option<R>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl<R> From<Job<R>> for JobView<R> {
    fn from(job: Job<R>) -> Self {
        Self {
            id: job.id,
            status: job.status,
            result: job.result,
            error: job.error,
            created_at: job.created_at,
            updated_at: job.updated_at,
            expires_at: job.expires_at,
        }
    }
}

/// Runs submitted work in the background and answers status queries by id.
pub struct JobTracker<E: JobExecutor> {
    store: Arc<dyn JobStore<E::Output>>,
    executor: Arc<E>,
    config: TrackerConfig,
}

impl<E: JobExecutor> JobTracker<E> {
    pub fn new(
        store: Arc<dyn JobStore<E::Output>>,
        executor: Arc<E>,
        config: TrackerConfig,
    ) -> Self {
        Self {
            store,
            executor,
            config,
        }
    }

    /// Records a pending job and starts executing it without waiting for the outcome.
    ///
    /// The record is stored before the task is spawned, so the returned id is
    /// queryable as soon as this returns.
    pub async fn submit(&self, payload: E::Payload) -> Result<JobId, TrackerError> {
        let job = Job::new(self.config.ttl);
        let job_id = job.id.clone();
        self.store.insert(job).await?;

        tracing::info!(job_id = %job_id, "Job submitted");

        let span = tracing::info_span!("job", job_id = %job_id);
        tokio::spawn(
            execute_job(
                Arc::clone(&self.store),
                Arc::clone(&self.executor),
                job_id.clone(),
                payload,
                self.config.execution_timeout,
            )
            .instrument(span),
        );

        Ok(job_id)
    }

    /// Unknown and expired ids both come back as `None`.
    pub async fn get_status(&self, id: &str) -> Result<Option<JobView<E::Output>>, TrackerError> {
        let job = self.store.get(&JobId::from_raw(id)).await?;
        Ok(job
            .filter(|j| !j.is_expired(Utc::now()))
            .map(JobView::from))
    }

    pub async fn evict_expired(&self) -> Result<usize, TrackerError> {
        Ok(self.store.evict_expired(Utc::now()).await?)
    }

    pub async fn len(&self) -> Result<usize, TrackerError> {
        Ok(self.store.len().await?)
    }
}

async fn execute_job<E: JobExecutor>(
    store: Arc<dyn JobStore<E::Output>>,
    executor: Arc<E>,
    job_id: JobId,
    payload: E::Payload,
    timeout: Duration,
) {
    if let Err(e) = store.transition(&job_id, JobTransition::Start).await {
        tracing::error!(error = %e, "Failed to mark job running");
        return;
    }
    tracing::debug!("Job started");

    // Run the executor on its own task so a panic in it still ends in `Failed`.
    let mut handle =
        tokio::spawn(async move { executor.execute(payload).await }.in_current_span());

    let transition = match tokio::time::timeout(timeout, &mut handle).await {
        Ok(Ok(Ok(output))) => {
            tracing::info!("Job completed");
            JobTransition::Complete(output)
        }
        Ok(Ok(Err(e))) => {
            tracing::warn!(error = %e, "Job failed");
            JobTransition::Fail(e.to_string())
        }
        Ok(Err(join_error)) => {
            tracing::error!(error = %join_error, "Job executor aborted");
            JobTransition::Fail(format!("job aborted: {}", join_error))
        }
        Err(_) => {
            handle.abort();
            let message = format!("job timed out after {}s", timeout.as_secs());
            tracing::warn!(error = %message, "Job failed");
            JobTransition::Fail(message)
        }
    };

    if let Err(e) = store.transition(&job_id, transition).await {
        tracing::error!(error = %e, "Failed to record job outcome");
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("job store: {0}")]
    Store(#[from] StoreError),
}
