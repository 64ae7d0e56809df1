use axum::Json;
use serde::Serialize;

use crate::domain::FortuneContext;

#[derive(Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
    pub locale: Option<String>,
}

pub async fn greeting_handler(fortune: Option<FortuneContext>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: "Hello!".to_string(),
        locale: fortune.map(|f| f.locale.to_string()),
    })
}

pub async fn plain_text_handler() -> &'static str {
    "Plain text is never decorated."
}
