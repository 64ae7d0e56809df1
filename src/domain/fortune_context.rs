use super::{FortuneKey, Locale};

/// The fortune drawn for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneContext {
    pub key: FortuneKey,
    pub locale: Locale,
    pub message: String,
}

impl FortuneContext {
    pub fn new(key: FortuneKey, locale: Locale, message: impl Into<String>) -> Self {
        Self {
            key,
            locale,
            message: message.into(),
        }
    }
}
