use folio::infrastructure::observability::TracingConfig;
use folio::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_default_config_when_created_then_plain_text_at_info() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert_eq!(config.level, "info");
    assert_eq!(config.environment, "local");
}

#[test]
fn given_logging_settings_when_building_config_then_fields_are_copied() {
    let logging = LoggingSettings {
        level: "debug".to_string(),
        json: true,
    };

    let config = TracingConfig::from_settings(&logging, Environment::Prod);

    assert!(config.json_format);
    assert_eq!(config.environment, "prod");
    assert_eq!(
        config.default_directives(),
        "debug,folio=debug,tower_http=debug"
    );
}
