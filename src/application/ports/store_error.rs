use crate::domain::{JobId, JobTransitionError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("duplicate job id: {0}")]
    Duplicate(JobId),
    #[error("not found: {0}")]
    NotFound(JobId),
    #[error(transparent)]
    InvalidTransition(#[from] JobTransitionError),
}
