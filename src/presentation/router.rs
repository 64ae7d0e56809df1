use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::presentation::handlers::{
    greeting_handler, health_handler, lucky_number_handler, lucky_numbers_handler,
    plain_text_handler,
};
use crate::presentation::middleware::{
    fortune_cookie_middleware, fortune_cookie_route, fortune_cookie_router,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let lucky = fortune_cookie_router(
        Router::new()
            .route("/number", get(lucky_number_handler))
            .route("/numbers", get(lucky_numbers_handler)),
    );

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/greeting", fortune_cookie_route(get(greeting_handler)))
        .route("/api/v1/plain", fortune_cookie_route(get(plain_text_handler)))
        .nest("/api/v1/lucky", lucky)
        .layer(middleware::from_fn_with_state(
            state.fortune.clone(),
            fortune_cookie_middleware,
        ))
        .layer(trace_layer)
        .with_state(state)
}
