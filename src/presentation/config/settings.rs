use std::time::Duration;

use config::{Config, File};
use serde::Deserialize;

use super::Environment;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub jobs: JobSettings,
    pub parser: ParserSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            max_upload_bytes: 100 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct JobSettings {
    pub ttl_secs: u64,
    pub execution_timeout_secs: u64,
    /// Zero leaves expiry passive: expired jobs are hidden but never removed.
    pub eviction_interval_secs: u64,
}

impl JobSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// The TTL as a calendar offset, rejected when `now + ttl` is not representable.
    pub fn job_ttl(&self) -> Result<chrono::Duration, SettingsError> {
        let out_of_range =
            || SettingsError::Invalid(format!("jobs.ttl_secs {} is out of range", self.ttl_secs));
        let ttl = chrono::Duration::from_std(self.ttl()).map_err(|_| out_of_range())?;
        chrono::Utc::now()
            .checked_add_signed(ttl)
            .map(|_| ttl)
            .ok_or_else(out_of_range)
    }

    pub fn execution_timeout(&self) -> Duration {
        Duration::from_secs(self.execution_timeout_secs)
    }

    pub fn eviction_interval(&self) -> Option<Duration> {
        (self.eviction_interval_secs > 0).then(|| Duration::from_secs(self.eviction_interval_secs))
    }
}

impl Default for JobSettings {
    fn default() -> Self {
        Self {
            ttl_secs: 60 * 60,
            execution_timeout_secs: 10 * 60,
            eviction_interval_secs: 0,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ParserSettings {
    pub base_url: String,
    pub lang: String,
    pub backend: String,
    pub parse_method: String,
    pub formula_enable: bool,
    pub table_enable: bool,
}

impl Default for ParserSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            lang: "ch".to_string(),
            backend: "pipeline".to_string(),
            parse_method: "auto".to_string(),
            formula_enable: true,
            table_enable: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid APP_ENVIRONMENT: {0}")]
    Environment(String),
    #[error("invalid setting: {0}")]
    Invalid(String),
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
}

impl Settings {
    /// Layers `appsettings.toml`, `appsettings.<env>.toml` and `APP_*`
    /// environment variables (nested keys separated by `__`) over the defaults.
    pub fn load() -> Result<(Settings, Environment), SettingsError> {
        dotenvy::dotenv().ok();

        let environment: Environment = std::env::var(ENVIRONMENT_VAR)
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::Environment)?;

        let settings: Settings = Config::builder()
            .add_source(File::with_name("appsettings").required(false))
            .add_source(
                File::with_name(&format!("appsettings.{}", environment.as_str())).required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        settings.jobs.job_ttl()?;

        Ok((settings, environment))
    }
}
