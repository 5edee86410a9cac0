use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{JobStore, StoreError};
use crate::domain::{Job, JobId, JobTransition};

/// Process-local job store. Records live until evicted or the process exits.
pub struct InMemoryJobStore<R> {
    jobs: RwLock<HashMap<JobId, Job<R>>>,
}

impl<R> InMemoryJobStore<R> {
    pub fn new() -> Self {
        Self {
            jobs: RwLock::new(HashMap::new()),
        }
    }
}

impl<R> Default for InMemoryJobStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R> JobStore<R> for InMemoryJobStore<R>
where
    R: Clone + Send + Sync + 'static,
{
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn insert(&self, job: Job<R>) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        match jobs.entry(job.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate(job.id)),
            Entry::Vacant(slot) => {
                slot.insert(job);
                Ok(())
            }
        }
    }

    async fn get(&self, id: &JobId) -> Result<Option<Job<R>>, StoreError> {
        Ok(self.jobs.read().await.get(id).cloned())
    }

    #[instrument(skip(self, transition), fields(job_id = %id, to = %transition.target()))]
    async fn transition(
        &self,
        id: &JobId,
        transition: JobTransition<R>,
    ) -> Result<(), StoreError> {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        job.apply(transition)?;
        Ok(())
    }

    async fn evict_expired(&self, now: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut jobs = self.jobs.write().await;
        let before = jobs.len();
        jobs.retain(|_, job| !job.is_expired(now));
        Ok(before - jobs.len())
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.jobs.read().await.len())
    }
}
