mod document_parser;
mod job_executor;
mod job_store;
mod store_error;

pub use document_parser::{DocumentParser, ParserError};
pub use job_executor::{ExecutorError, JobExecutor};
pub use job_store::JobStore;
pub use store_error::StoreError;
