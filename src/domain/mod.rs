mod document;
mod job;
mod job_id;
mod job_status;
mod paragraph;
mod parse_outcome;

pub use document::{ContentType, Document};
pub use job::{Job, JobTransition, JobTransitionError};
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use paragraph::{NO_CONTENT_PLACEHOLDER, segment_paragraphs};
pub use parse_outcome::{ParseOutcome, ParsedText, ResponseShape};
