use std::sync::Arc;

use crate::application::services::{JobTracker, ParseExecutor};
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub tracker: Arc<JobTracker<ParseExecutor>>,
    pub settings: Settings,
}
