mod job_reaper;
mod job_tracker;
mod parse_executor;

pub use job_reaper::JobReaper;
pub use job_tracker::{
    DEFAULT_EXECUTION_TIMEOUT, DEFAULT_JOB_TTL, JobTracker, JobView, TrackerConfig, TrackerError,
};
pub use parse_executor::{ParseExecutor, ParseRequest};
