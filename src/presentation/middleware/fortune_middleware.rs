use std::borrow::Cow;
use std::num::NonZeroU32;
use std::sync::Arc;

use axum::body::{Body, HttpBody};
use axum::extract::{Request, State};
use axum::http::header::{ACCEPT_LANGUAGE, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;

use crate::application::ports::{FortuneProvider, MessageCatalog};
use crate::application::services::{
    AdviceOptions, DefaultFortuneProvider, FortuneAdvice, ResponseContext,
};
use crate::domain::{FortuneApplied, FortuneContext, FortuneCookie, Locale};
use crate::infrastructure::i18n::{JsonMessageCatalog, negotiate_locale};
use crate::presentation::config::{DEFAULT_MAX_BODY_BYTES, FortuneCookieSettings, SettingsError};

/// Shared, read-only state of the fortune cookie middleware.
#[derive(Clone)]
pub struct FortuneCookieState {
    pub provider: Arc<dyn FortuneProvider>,
    pub catalog: Arc<dyn MessageCatalog>,
    pub advice: Arc<FortuneAdvice>,
    pub default_locale: Locale,
    pub header_name: Option<HeaderName>,
    pub max_body_bytes: usize,
}

impl FortuneCookieState {
    pub fn new(
        provider: Arc<dyn FortuneProvider>,
        catalog: Arc<dyn MessageCatalog>,
        advice: FortuneAdvice,
        default_locale: Locale,
    ) -> Self {
        Self {
            provider,
            catalog,
            advice: Arc::new(advice),
            default_locale,
            header_name: None,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_header_name(mut self, header_name: HeaderName) -> Self {
        self.header_name = Some(header_name);
        self
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn from_settings(settings: &FortuneCookieSettings) -> Result<Self, SettingsError> {
        settings.validate()?;

        let default_locale = settings.locale()?;
        let catalog: Arc<dyn MessageCatalog> = match &settings.messages_dir {
            Some(dir) => Arc::new(JsonMessageCatalog::from_dir(dir, default_locale.clone())?),
            None => Arc::new(JsonMessageCatalog::bundled(default_locale.clone())),
        };

        let fortunes_count =
            NonZeroU32::new(settings.fortunes_count).ok_or_else(|| SettingsError::Invalid {
                field: "fortune.fortunes_count",
                reason: "must be at least 1".to_string(),
            })?;
        let provider = Arc::new(DefaultFortuneProvider::new(
            Arc::clone(&catalog),
            fortunes_count,
        ));

        let advice = FortuneAdvice::new(AdviceOptions {
            enabled: settings.enabled,
            include_in_response: settings.include_in_response,
            response_fortune_name: settings.response_fortune_name.clone(),
            include_in_header: settings.include_in_header,
        });

        let mut state = Self::new(provider, catalog, advice, default_locale)
            .with_max_body_bytes(settings.max_body_bytes);
        if settings.include_in_header {
            state = state.with_header_name(settings.header()?);
        }

        Ok(state)
    }

    /// Draws the fortune for `request`, or `None` when augmentation is disabled.
    pub fn draw(&self, request: &Request) -> Option<FortuneContext> {
        if !self.advice.is_enabled() {
            return None;
        }

        let accept_language = request
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok());
        let locale =
            negotiate_locale(accept_language, self.catalog.as_ref(), &self.default_locale);

        Some(self.provider.draw(&locale))
    }
}

pub async fn fortune_cookie_middleware(
    State(state): State<FortuneCookieState>,
    mut request: Request,
    next: Next,
) -> Response {
    let fortune = state.draw(&request);
    if let Some(fortune) = &fortune {
        request.extensions_mut().insert(fortune.clone());
    }

    let response = next.run(request).await;

    let marker = response.extensions().get::<FortuneCookie>().copied();
    let supported = {
        let context = ResponseContext {
            content_type: response
                .headers()
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok()),
            marker,
            already_applied: response.extensions().get::<FortuneApplied>().is_some(),
        };
        state.advice.supports(&context)
    };

    match (supported, marker, fortune) {
        (true, Some(marker), Some(fortune)) => {
            tracing::debug!(scope = ?marker.scope, key = %fortune.key, "Decorating response");
            decorate(&state, response, &fortune).await
        }
        _ => response,
    }
}

async fn decorate(
    state: &FortuneCookieState,
    response: Response,
    fortune: &FortuneContext,
) -> Response {
    let (mut parts, body) = response.into_parts();
    parts.extensions.insert(FortuneApplied);

    let header_message = state.advice.header_message(Some(fortune));
    if let (Some(name), Some(message)) = (&state.header_name, header_message) {
        match HeaderValue::from_bytes(message.as_bytes()) {
            Ok(value) => {
                parts.headers.insert(name.clone(), value);
            }
            Err(e) => tracing::debug!(error = %e, "Fortune message is not a valid header value"),
        }
    }

    if !state.advice.options().include_in_response {
        return Response::from_parts(parts, body);
    }

    let fits = body
        .size_hint()
        .upper()
        .is_some_and(|upper| upper <= state.max_body_bytes as u64);
    if !fits {
        tracing::debug!(
            max_body_bytes = state.max_body_bytes,
            "Response body unbounded or too large, skipping fortune"
        );
        return Response::from_parts(parts, body);
    }

    let bytes = match axum::body::to_bytes(body, state.max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to buffer response body");
            parts.headers.remove(CONTENT_LENGTH);
            return Response::from_parts(parts, Body::empty());
        }
    };

    let value: Value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Response body is not valid JSON, skipping fortune");
            return Response::from_parts(parts, Body::from(bytes));
        }
    };

    let Cow::Owned(merged) = state.advice.apply(&value, Some(fortune)) else {
        return Response::from_parts(parts, Body::from(bytes));
    };

    match serde_json::to_vec(&merged) {
        Ok(encoded) => {
            tracing::debug!(
                key = %fortune.key,
                locale = %fortune.locale,
                "Fortune added to response"
            );
            parts.headers.remove(CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(encoded))
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to encode decorated body");
            Response::from_parts(parts, Body::from(bytes))
        }
    }
}
