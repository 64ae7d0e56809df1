use std::fmt;

pub const FORTUNE_KEY_PREFIX: &str = "fortune.";
pub const DEFAULT_FORTUNE_KEY: &str = "fortune.default";

/// Catalog key of a single fortune message, e.g. `fortune.3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FortuneKey(String);

impl FortuneKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn from_index(index: u32) -> Self {
        Self(format!("{}{}", FORTUNE_KEY_PREFIX, index))
    }

    pub fn default_key() -> Self {
        Self(DEFAULT_FORTUNE_KEY.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric index for keys of the form `fortune.<n>`.
    pub fn index(&self) -> Option<u32> {
        self.0.strip_prefix(FORTUNE_KEY_PREFIX)?.parse().ok()
    }
}

impl fmt::Display for FortuneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
