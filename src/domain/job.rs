use chrono::{DateTime, Duration, Utc};

use super::{JobId, JobStatus};

/// One tracked unit of asynchronous work.
///
/// `result` is set only in `Completed`, `error` only in `Failed`. The payload
/// never lives here; it moves straight into the task that executes the job.
#[derive(Debug, Clone)]
pub struct Job<R> {
    pub id: JobId,
    pub status: JobStatus,
    pub result: Option<R>,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

/// A state change requested by the job's execution routine.
#[derive(Debug, Clone)]
pub enum JobTransition<R> {
    Start,
    Complete(R),
    Fail(String),
}

impl<R> JobTransition<R> {
    pub fn target(&self) -> JobStatus {
        match self {
            JobTransition::Start => JobStatus::Running,
            JobTransition::Complete(_) => JobStatus::Completed,
            JobTransition::Fail(_) => JobStatus::Failed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid job transition: {from} -> {to}")]
pub struct JobTransitionError {
    pub from: JobStatus,
    pub to: JobStatus,
}

impl<R> Job<R> {
    /// A `ttl` that overflows the calendar saturates to the latest representable instant.
    pub fn new(ttl: Duration) -> Self {
        Self::with_id(JobId::new(), ttl)
    }

    pub fn with_id(id: JobId, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            id,
            status: JobStatus::Pending,
            result: None,
            error: None,
            created_at: now,
            updated_at: now,
            expires_at: now.checked_add_signed(ttl).unwrap_or(DateTime::<Utc>::MAX_UTC),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Applies `transition` in place, or leaves the job untouched and returns an error.
    pub fn apply(&mut self, transition: JobTransition<R>) -> Result<(), JobTransitionError> {
        let to = transition.target();
        let allowed = matches!(
            (self.status, to),
            (JobStatus::Pending, JobStatus::Running)
                | (JobStatus::Running, JobStatus::Completed)
                | (JobStatus::Running, JobStatus::Failed)
        );
        if !allowed {
            return Err(JobTransitionError {
                from: self.status,
                to,
            });
        }

        match transition {
            JobTransition::Start => {}
            JobTransition::Complete(result) => self.result = Some(result),
            JobTransition::Fail(message) => self.error = Some(message),
        }
        self.status = to;
        self.updated_at = Utc::now();
        Ok(())
    }
}
