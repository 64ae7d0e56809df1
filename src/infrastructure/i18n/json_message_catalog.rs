use std::collections::HashMap;
use std::path::Path;

use crate::application::ports::{CatalogError, MessageCatalog};
use crate::domain::Locale;

const BUNDLED_EN: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/en.json"));
const BUNDLED_KO: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/i18n/ko.json"));

/// Message catalog backed by flat JSON bundles, one per locale.
///
/// Lookups try the exact locale, then its script and language forms, then the
/// default locale.
#[derive(Debug, Clone)]
pub struct JsonMessageCatalog {
    bundles: HashMap<Locale, HashMap<String, String>>,
    default_locale: Locale,
}

impl JsonMessageCatalog {
    pub fn new(default_locale: Locale) -> Self {
        Self {
            bundles: HashMap::new(),
            default_locale,
        }
    }

    /// Catalog with the `en` and `ko` bundles compiled into the crate.
    pub fn bundled(default_locale: Locale) -> Self {
        let mut catalog = Self::new(default_locale);
        for (tag, raw) in [("en", BUNDLED_EN), ("ko", BUNDLED_KO)] {
            let Some(locale) = Locale::parse(tag) else {
                continue;
            };
            if let Err(e) = catalog.add_bundle_json(locale, raw) {
                tracing::error!(locale = tag, error = %e, "Failed to parse bundled fortunes");
            }
        }
        catalog
    }

    /// Loads every `<locale>.json` file in `dir`.
    pub fn from_dir(dir: impl AsRef<Path>, default_locale: Locale) -> Result<Self, CatalogError> {
        let mut catalog = Self::new(default_locale);

        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }

            let Some(locale) = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(Locale::parse)
            else {
                tracing::warn!(
                    path = %path.display(),
                    "Skipping bundle with unrecognized locale name"
                );
                continue;
            };

            let raw = std::fs::read_to_string(&path)?;
            catalog.add_bundle_json(locale, &raw)?;
        }

        tracing::info!(
            dir = %dir.as_ref().display(),
            bundles = catalog.bundles.len(),
            "Loaded fortune bundles"
        );

        Ok(catalog)
    }

    pub fn with_bundle(mut self, locale: Locale, messages: HashMap<String, String>) -> Self {
        self.bundles.insert(locale, messages);
        self
    }

    pub fn add_bundle_json(&mut self, locale: Locale, raw: &str) -> Result<(), CatalogError> {
        let messages: HashMap<String, String> =
            serde_json::from_str(raw).map_err(|e| CatalogError::MalformedBundle {
                name: locale.to_string(),
                reason: e.to_string(),
            })?;
        self.bundles.insert(locale, messages);
        Ok(())
    }

    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.bundles.keys()
    }

    fn candidates(&self, locale: &Locale) -> Vec<Locale> {
        let mut candidates = locale.fallback_chain();
        if !candidates.contains(&self.default_locale) {
            candidates.push(self.default_locale.clone());
        }
        candidates
    }
}

impl MessageCatalog for JsonMessageCatalog {
    fn message(&self, key: &str, locale: &Locale) -> Result<String, CatalogError> {
        let mut found_bundle = false;

        for candidate in self.candidates(locale) {
            let Some(bundle) = self.bundles.get(&candidate) else {
                continue;
            };
            found_bundle = true;
            if let Some(message) = bundle.get(key) {
                return Ok(message.clone());
            }
        }

        if found_bundle {
            Err(CatalogError::MissingKey {
                key: key.to_string(),
                locale: locale.to_string(),
            })
        } else {
            Err(CatalogError::MissingBundle(locale.to_string()))
        }
    }

    fn supports_locale(&self, locale: &Locale) -> bool {
        locale
            .fallback_chain()
            .iter()
            .any(|candidate| self.bundles.contains_key(candidate))
    }
}
