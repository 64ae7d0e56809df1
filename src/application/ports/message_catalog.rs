use crate::domain::Locale;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no bundle for locale: {0}")]
    MissingBundle(String),
    #[error("no message for key {key} in locale {locale}")]
    MissingKey { key: String, locale: String },
    #[error("malformed bundle {name}: {reason}")]
    MalformedBundle { name: String, reason: String },
    #[error("failed to read bundle: {0}")]
    Io(#[from] std::io::Error),
}

/// Key/locale to localized string lookup.
pub trait MessageCatalog: Send + Sync {
    fn message(&self, key: &str, locale: &Locale) -> Result<String, CatalogError>;

    /// Whether a bundle exists for `locale` or its language.
    fn supports_locale(&self, locale: &Locale) -> bool;
}
