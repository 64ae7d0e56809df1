use std::fmt;
use std::str::FromStr;

use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE_TAG: &str = "en";

/// Canonicalized BCP 47 language identifier (`zh-Hant-TW`, `ko-KR`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale(LanguageIdentifier);

impl Locale {
    pub fn parse(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        if tag.is_empty() {
            return None;
        }

        let id = tag.parse::<LanguageIdentifier>().ok()?;
        if id.language.as_str() == "und" {
            return None;
        }

        Some(Self(id))
    }

    pub fn language(&self) -> &str {
        self.0.language.as_str()
    }

    pub fn script(&self) -> Option<&str> {
        self.0.script.as_ref().map(|script| script.as_str())
    }

    pub fn id(&self) -> &LanguageIdentifier {
        &self.0
    }

    /// This locale followed by its less specific forms:
    /// `zh-Hant-TW` -> `zh-Hant` -> `zh`.
    pub fn fallback_chain(&self) -> Vec<Locale> {
        let mut chain = vec![self.clone()];

        if self.0.script.is_some() {
            let with_script = Self(LanguageIdentifier::from_parts(
                self.0.language,
                self.0.script,
                None,
                &[],
            ));
            if !chain.contains(&with_script) {
                chain.push(with_script);
            }
        }

        let language_only =
            Self(LanguageIdentifier::from_parts(self.0.language, None, None, &[]));
        if !chain.contains(&language_only) {
            chain.push(language_only);
        }

        chain
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self(DEFAULT_LOCALE_TAG.parse().unwrap_or_default())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid locale tag: {}", s))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
