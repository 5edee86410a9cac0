mod error_response;
mod health;
mod job_status;
mod parse;

pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use job_status::job_status_handler;
pub use parse::submit_parse_handler;
