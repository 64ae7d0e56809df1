use std::borrow::Cow;

use serde_json::{Value, json};

use fortune_cookie::application::services::{
    AdviceOptions, FortuneAdvice, ResponseContext, is_json_content_type,
};
use fortune_cookie::domain::{FortuneContext, FortuneCookie, FortuneKey, Locale};

fn advice(enabled: bool, include_in_response: bool) -> FortuneAdvice {
    FortuneAdvice::new(AdviceOptions {
        enabled,
        include_in_response,
        response_fortune_name: "fortune".to_string(),
        include_in_header: false,
    })
}

fn be_bold() -> FortuneContext {
    FortuneContext::new(FortuneKey::from_index(8), Locale::default(), "Be bold")
}

fn marked_json() -> ResponseContext<'static> {
    ResponseContext {
        content_type: Some("application/json"),
        marker: Some(FortuneCookie::handler()),
        already_applied: false,
    }
}

#[test]
fn given_enabled_marked_json_response_when_checking_then_supported() {
    assert!(advice(true, true).supports(&marked_json()));
}

#[test]
fn given_disabled_advice_when_checking_then_never_supported() {
    let advice = advice(false, true);

    assert!(!advice.supports(&marked_json()));
    assert!(!advice.supports(&ResponseContext {
        marker: Some(FortuneCookie::router()),
        ..marked_json()
    }));
}

#[test]
fn given_unmarked_handler_when_checking_then_not_supported() {
    let context = ResponseContext {
        marker: None,
        ..marked_json()
    };

    assert!(!advice(true, true).supports(&context));
    assert!(!advice(true, false).supports(&context));
}

#[test]
fn given_router_level_marker_when_checking_then_supported() {
    let context = ResponseContext {
        marker: Some(FortuneCookie::router()),
        ..marked_json()
    };

    assert!(advice(true, true).supports(&context));
}

#[test]
fn given_non_json_or_missing_content_type_when_checking_then_not_supported() {
    let advice = advice(true, true);

    for content_type in [Some("text/plain; charset=utf-8"), Some("text/html"), None] {
        let context = ResponseContext {
            content_type,
            ..marked_json()
        };
        assert!(!advice.supports(&context), "{:?}", content_type);
    }
}

#[test]
fn given_already_decorated_response_when_checking_then_not_supported() {
    let context = ResponseContext {
        already_applied: true,
        ..marked_json()
    };

    assert!(!advice(true, true).supports(&context));
}

#[test]
fn given_missing_context_when_checking_then_fails_closed() {
    assert!(!advice(true, true).supports(&ResponseContext::default()));
}

#[test]
fn given_json_media_types_when_classifying_then_accepts_json_and_suffix_types() {
    assert!(is_json_content_type("application/json"));
    assert!(is_json_content_type("Application/JSON; charset=utf-8"));
    assert!(is_json_content_type("application/problem+json"));
    assert!(!is_json_content_type("text/json-ish"));
    assert!(!is_json_content_type("application/xml"));
}

#[test]
fn given_mapping_body_and_fortune_when_applying_then_adds_field() {
    let body = json!({"data": 1});

    let result = advice(true, true).apply(&body, Some(&be_bold()));

    assert_eq!(*result, json!({"data": 1, "fortune": "Be bold"}));
    assert_eq!(body, json!({"data": 1}));
}

#[test]
fn given_body_inclusion_disabled_when_applying_then_body_unchanged() {
    let body = json!({"data": 1});

    let result = advice(true, false).apply(&body, Some(&be_bold()));

    assert!(matches!(result, Cow::Borrowed(_)));
    assert_eq!(*result, json!({"data": 1}));
}

#[test]
fn given_no_stashed_fortune_when_applying_then_body_unchanged() {
    let body = json!({"data": 1});

    let result = advice(true, true).apply(&body, None);

    assert!(matches!(result, Cow::Borrowed(_)));
}

#[test]
fn given_non_mapping_bodies_when_applying_then_returns_same_value() {
    let advice = advice(true, true);
    let bodies = [
        json!([1, 2, 3]),
        json!("text"),
        json!(42),
        json!(true),
        Value::Null,
    ];

    for body in &bodies {
        let result = advice.apply(body, Some(&be_bold()));
        match result {
            Cow::Borrowed(returned) => assert!(std::ptr::eq(returned, body)),
            Cow::Owned(_) => panic!("non-mapping body was rebuilt: {}", body),
        }
    }
}

#[test]
fn given_existing_fortune_field_when_applying_then_replaces_it_once() {
    let body = json!({"fortune": "old", "data": 1});

    let result = advice(true, true).apply(&body, Some(&be_bold()));

    let fields = result.as_object().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields["fortune"], "Be bold");
}

#[test]
fn given_mapping_body_when_applying_then_preserves_field_order() {
    let body = json!({"b": 1, "a": 2});

    let result = advice(true, true).apply(&body, Some(&be_bold()));

    let keys: Vec<&str> = result.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, ["b", "a", "fortune"]);
}

#[test]
fn given_header_mode_when_asking_header_message_then_returns_fortune() {
    let header_advice = FortuneAdvice::new(AdviceOptions {
        include_in_header: true,
        ..advice(true, false).options().clone()
    });
    let fortune = be_bold();

    assert_eq!(header_advice.header_message(Some(&fortune)), Some("Be bold"));
    assert_eq!(advice(true, true).header_message(Some(&fortune)), None);
}
