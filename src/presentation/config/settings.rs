use std::collections::HashMap;

use axum::http::HeaderName;
use serde::Deserialize;

use super::Environment;
use crate::application::ports::CatalogError;
use crate::domain::{DEFAULT_LOCALE_TAG, Locale};
use crate::infrastructure::observability::DEFAULT_LOG_FILTER;

pub const DEFAULT_FORTUNES_COUNT: u32 = 10;
pub const DEFAULT_RESPONSE_FORTUNE_NAME: &str = "fortune";
pub const DEFAULT_HEADER_NAME: &str = "x-fortune-cookie";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
    #[error("failed to load fortune messages: {0}")]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub fortune: FortuneCookieSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            enable_json: false,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FortuneCookieSettings {
    pub enabled: bool,
    pub include_in_response: bool,
    pub response_fortune_name: String,
    pub fortunes_count: u32,
    pub include_in_header: bool,
    pub header_name: String,
    pub default_locale: String,
    /// Directory of `<locale>.json` bundles. Bundled messages are used when unset.
    pub messages_dir: Option<String>,
    pub max_body_bytes: usize,
}

impl Default for FortuneCookieSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            include_in_response: true,
            response_fortune_name: DEFAULT_RESPONSE_FORTUNE_NAME.to_string(),
            fortunes_count: DEFAULT_FORTUNES_COUNT,
            include_in_header: false,
            header_name: DEFAULT_HEADER_NAME.to_string(),
            default_locale: DEFAULT_LOCALE_TAG.to_string(),
            messages_dir: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl FortuneCookieSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.fortunes_count == 0 {
            return Err(SettingsError::Invalid {
                field: "fortune.fortunes_count",
                reason: "must be at least 1".to_string(),
            });
        }

        if self.response_fortune_name.trim().is_empty() {
            return Err(SettingsError::Invalid {
                field: "fortune.response_fortune_name",
                reason: "must not be empty".to_string(),
            });
        }

        self.locale()?;
        if self.include_in_header {
            self.header()?;
        }

        Ok(())
    }

    pub fn locale(&self) -> Result<Locale, SettingsError> {
        Locale::parse(&self.default_locale).ok_or_else(|| SettingsError::Invalid {
            field: "fortune.default_locale",
            reason: format!("'{}' is not a language tag", self.default_locale),
        })
    }

    pub fn header(&self) -> Result<HeaderName, SettingsError> {
        HeaderName::try_from(self.header_name.as_str()).map_err(|e| SettingsError::Invalid {
            field: "fortune.header_name",
            reason: e.to_string(),
        })
    }
}

impl Settings {
    /// Defaults, then `appsettings.<env>.toml`, then `APP_<SECTION>__<KEY>` variables.
    pub fn load(environment: Environment) -> Result<Self, SettingsError> {
        Self::build(environment, None)
    }

    /// Same layering as [`Settings::load`], with `APP_*` variables taken from `vars`.
    pub fn load_with_vars(
        environment: Environment,
        vars: HashMap<String, String>,
    ) -> Result<Self, SettingsError> {
        Self::build(environment, Some(vars))
    }

    fn build(
        environment: Environment,
        vars: Option<HashMap<String, String>>,
    ) -> Result<Self, SettingsError> {
        let settings: Settings = config::Config::builder()
            .add_source(
                config::File::with_name(&format!("appsettings.{}", environment.as_str()))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(vars.map(|vars| vars.into_iter().collect())),
            )
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.fortune.validate()
    }
}
