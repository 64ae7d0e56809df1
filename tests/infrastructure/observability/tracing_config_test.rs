use fortune_cookie::infrastructure::observability::{DEFAULT_LOG_FILTER, TracingConfig};

#[test]
fn given_default_config_when_created_then_environment_is_set() {
    let config = TracingConfig::default();
    assert!(!config.environment.is_empty());
    assert_eq!(config.filter, DEFAULT_LOG_FILTER);
}

#[test]
fn given_explicit_values_when_creating_then_fields_are_kept() {
    let config = TracingConfig::new("prod", true, "warn");
    assert_eq!(config.environment, "prod");
    assert!(config.json_format);
    assert_eq!(config.filter, "warn");
}
