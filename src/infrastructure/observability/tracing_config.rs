pub const DEFAULT_LOG_FILTER: &str = "info,fortune_cookie=debug,tower_http=debug";

/// Configuration for tracing initialization.
pub struct TracingConfig {
    pub environment: String,
    pub json_format: bool,
    pub filter: String,
}

impl TracingConfig {
    pub fn new(
        environment: impl Into<String>,
        json_format: bool,
        filter: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            json_format,
            filter: filter.into(),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            json_format: std::env::var("LOG_FORMAT")
                .map(|v| v.to_lowercase() == "json")
                .unwrap_or(false),
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
