use std::fmt;

use chrono::Utc;
use uuid::Uuid;

const PREFIX: &str = "task_";

/// Opaque job handle: `task_<unix millis>_<uuid v4 hex>`.
///
/// Not an access credential. Anyone holding an id can read the job.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct JobId(String);

impl JobId {
    pub fn new() -> Self {
        Self(format!(
            "{}{}_{}",
            PREFIX,
            Utc::now().timestamp_millis(),
            Uuid::new_v4().simple()
        ))
    }

    /// Accepts any string a caller hands us. Lookups on a malformed id simply miss.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for JobId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
