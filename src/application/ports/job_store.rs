use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Job, JobId, JobTransition};

use super::StoreError;

#[async_trait]
pub trait JobStore<R>: Send + Sync
where
    R: Clone + Send + Sync + 'static,
{
    async fn insert(&self, job: Job<R>) -> Result<(), StoreError>;

    /// Returns the stored record as-is, expired or not.
    async fn get(&self, id: &JobId) -> Result<Option<Job<R>>, StoreError>;

    /// Applies `transition` to the whole record under one write.
    async fn transition(
        &self,
        id: &JobId,
        transition: JobTransition<R>,
    ) -> Result<(), StoreError>;

    /// Removes every record whose `expires_at` is at or before `now`.
    async fn evict_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError>;

    async fn len(&self) -> Result<usize, StoreError>;
}
