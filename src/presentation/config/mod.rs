mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    DEFAULT_FORTUNES_COUNT, DEFAULT_HEADER_NAME, DEFAULT_MAX_BODY_BYTES,
    DEFAULT_RESPONSE_FORTUNE_NAME, FortuneCookieSettings, LoggingSettings, ServerSettings,
    Settings, SettingsError,
};
