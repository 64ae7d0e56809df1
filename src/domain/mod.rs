mod fortune_context;
mod fortune_key;
mod fortune_marker;
mod locale;

pub use fortune_context::FortuneContext;
pub use fortune_key::{DEFAULT_FORTUNE_KEY, FORTUNE_KEY_PREFIX, FortuneKey};
pub use fortune_marker::{FortuneApplied, FortuneCookie, MarkerScope};
pub use locale::{DEFAULT_LOCALE_TAG, Locale};
