use std::num::NonZeroU32;
use std::sync::Arc;

use rand::Rng;

use crate::application::ports::{FortuneProvider, MessageCatalog};
use crate::domain::{DEFAULT_FORTUNE_KEY, FortuneKey, Locale};

pub const FALLBACK_FORTUNE: &str = "Today is your lucky day!";

/// Draws `fortune.1 ..= fortune.N` uniformly and resolves it through a catalog.
pub struct DefaultFortuneProvider {
    catalog: Arc<dyn MessageCatalog>,
    fortunes_count: NonZeroU32,
}

impl DefaultFortuneProvider {
    pub fn new(catalog: Arc<dyn MessageCatalog>, fortunes_count: NonZeroU32) -> Self {
        Self {
            catalog,
            fortunes_count,
        }
    }

    fn default_fortune(&self, locale: &Locale) -> String {
        self.catalog
            .message(DEFAULT_FORTUNE_KEY, locale)
            .ok()
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| FALLBACK_FORTUNE.to_string())
    }
}

impl FortuneProvider for DefaultFortuneProvider {
    fn generate_key(&self) -> FortuneKey {
        let index = rand::thread_rng().gen_range(1..=self.fortunes_count.get());
        FortuneKey::from_index(index)
    }

    fn fortune(&self, key: &FortuneKey, locale: &Locale) -> String {
        match self.catalog.message(key.as_str(), locale) {
            Ok(message) if !message.is_empty() => message,
            Ok(_) => {
                tracing::debug!(
                    key = %key,
                    locale = %locale,
                    "Empty fortune message, using default"
                );
                self.default_fortune(locale)
            }
            Err(e) => {
                tracing::debug!(
                    key = %key,
                    locale = %locale,
                    error = %e,
                    "Fortune lookup failed, using default"
                );
                self.default_fortune(locale)
            }
        }
    }
}
