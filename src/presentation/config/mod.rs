mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ENVIRONMENT_VAR, JobSettings, LoggingSettings, ParserSettings, ServerSettings, Settings,
    SettingsError,
};
