use std::borrow::Cow;

use serde_json::Value;

use crate::domain::{FortuneContext, FortuneCookie};

#[derive(Debug, Clone)]
pub struct AdviceOptions {
    pub enabled: bool,
    pub include_in_response: bool,
    pub response_fortune_name: String,
    pub include_in_header: bool,
}

/// What the advice can see of an outgoing response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseContext<'a> {
    pub content_type: Option<&'a str>,
    pub marker: Option<FortuneCookie>,
    pub already_applied: bool,
}

/// Decides whether a response gets a fortune and merges it into JSON bodies.
#[derive(Debug, Clone)]
pub struct FortuneAdvice {
    options: AdviceOptions,
}

impl FortuneAdvice {
    pub fn new(options: AdviceOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &AdviceOptions {
        &self.options
    }

    pub fn is_enabled(&self) -> bool {
        self.options.enabled
    }

    pub fn supports(&self, context: &ResponseContext<'_>) -> bool {
        if !self.options.enabled || context.already_applied {
            return false;
        }

        if !context.content_type.is_some_and(is_json_content_type) {
            return false;
        }

        context.marker.is_some()
    }

    /// Returns `body` plus the fortune field, or `body` itself when nothing applies.
    pub fn apply<'a>(&self, body: &'a Value, fortune: Option<&FortuneContext>) -> Cow<'a, Value> {
        let Value::Object(fields) = body else {
            return Cow::Borrowed(body);
        };

        match fortune {
            Some(fortune) if self.options.include_in_response => {
                let mut merged = fields.clone();
                merged.insert(
                    self.options.response_fortune_name.clone(),
                    Value::String(fortune.message.clone()),
                );
                Cow::Owned(Value::Object(merged))
            }
            _ => Cow::Borrowed(body),
        }
    }

    pub fn header_message<'f>(&self, fortune: Option<&'f FortuneContext>) -> Option<&'f str> {
        if !self.options.include_in_header {
            return None;
        }
        fortune.map(|f| f.message.as_str())
    }
}

/// `application/json` or any `application/*+json` media type.
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
