use std::collections::HashMap;
use std::num::NonZeroU32;
use std::sync::Arc;

use fortune_cookie::application::ports::{CatalogError, FortuneProvider, MessageCatalog};
use fortune_cookie::application::services::{DefaultFortuneProvider, FALLBACK_FORTUNE};
use fortune_cookie::domain::{FortuneKey, Locale};
use fortune_cookie::infrastructure::i18n::JsonMessageCatalog;

struct FailingCatalog;

impl MessageCatalog for FailingCatalog {
    fn message(&self, _key: &str, locale: &Locale) -> Result<String, CatalogError> {
        Err(CatalogError::MissingBundle(locale.to_string()))
    }

    fn supports_locale(&self, _locale: &Locale) -> bool {
        false
    }
}

fn locale(tag: &str) -> Locale {
    Locale::parse(tag).unwrap()
}

fn provider_with(catalog: Arc<dyn MessageCatalog>, count: u32) -> DefaultFortuneProvider {
    DefaultFortuneProvider::new(catalog, NonZeroU32::new(count).unwrap())
}

fn small_catalog() -> Arc<dyn MessageCatalog> {
    let en = HashMap::from([
        ("fortune.1".to_string(), "Be bold".to_string()),
        ("fortune.default".to_string(), "Default luck".to_string()),
    ]);
    let ko = HashMap::from([("fortune.1".to_string(), "용기를 내세요".to_string())]);

    Arc::new(
        JsonMessageCatalog::new(locale("en"))
            .with_bundle(locale("en"), en)
            .with_bundle(locale("ko"), ko),
    )
}

#[test]
fn given_count_when_generating_many_keys_then_all_are_in_range() {
    let provider = provider_with(small_catalog(), 7);

    for _ in 0..5_000 {
        let index = provider.generate_key().index().unwrap();
        assert!((1..=7).contains(&index), "out of range: {}", index);
    }
}

#[test]
fn given_count_when_generating_many_keys_then_distribution_is_roughly_uniform() {
    let provider = provider_with(small_catalog(), 5);
    let mut counts = [0usize; 5];

    for _ in 0..10_000 {
        let index = provider.generate_key().index().unwrap();
        counts[(index - 1) as usize] += 1;
    }

    for count in counts {
        assert!((1_600..=2_400).contains(&count), "skewed counts: {:?}", counts);
    }
}

#[test]
fn given_count_of_one_when_generating_key_then_always_first() {
    let provider = provider_with(small_catalog(), 1);
    assert_eq!(provider.generate_key(), FortuneKey::from_index(1));
}

#[test]
fn given_known_key_when_resolving_then_returns_localized_message() {
    let provider = provider_with(small_catalog(), 1);

    assert_eq!(
        provider.fortune(&FortuneKey::from_index(1), &locale("ko-KR")),
        "용기를 내세요"
    );
    assert_eq!(
        provider.fortune(&FortuneKey::from_index(1), &locale("en")),
        "Be bold"
    );
}

#[test]
fn given_unknown_key_when_resolving_then_returns_default_message() {
    let provider = provider_with(small_catalog(), 1);

    let message = provider.fortune(&FortuneKey::from_index(99), &locale("en"));
    assert_eq!(message, "Default luck");
}

#[test]
fn given_unknown_locale_when_resolving_then_uses_default_locale_bundle() {
    let provider = provider_with(small_catalog(), 1);

    let message = provider.fortune(&FortuneKey::from_index(1), &locale("fr"));
    assert_eq!(message, "Be bold");
}

#[test]
fn given_failing_catalog_when_resolving_then_returns_hardcoded_fallback() {
    let provider = provider_with(Arc::new(FailingCatalog), 3);

    let message = provider.fortune(&FortuneKey::from_index(2), &locale("en"));
    assert_eq!(message, FALLBACK_FORTUNE);
    assert!(!message.is_empty());
}

#[test]
fn given_provider_when_drawing_then_context_carries_key_locale_and_message() {
    let provider = provider_with(small_catalog(), 1);

    let context = provider.draw(&locale("en"));
    assert_eq!(context.key, FortuneKey::from_index(1));
    assert_eq!(context.locale, locale("en"));
    assert_eq!(context.message, "Be bold");
}
