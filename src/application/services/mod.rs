mod default_fortune_provider;
mod fortune_advice;

pub use default_fortune_provider::{DefaultFortuneProvider, FALLBACK_FORTUNE};
pub use fortune_advice::{AdviceOptions, FortuneAdvice, ResponseContext, is_json_content_type};
