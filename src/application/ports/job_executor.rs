use async_trait::async_trait;

use super::ParserError;

/// The routine bound to a tracker that performs each job's work.
#[async_trait]
pub trait JobExecutor: Send + Sync + 'static {
    type Payload: Send + 'static;
    type Output: Clone + Send + Sync + 'static;

    async fn execute(&self, payload: Self::Payload) -> Result<Self::Output, ExecutorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("{0}")]
    Parser(#[from] ParserError),
    #[error("{0}")]
    Failed(String),
}
