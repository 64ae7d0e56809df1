use std::convert::Infallible;

use axum::extract::OptionalFromRequestParts;
use axum::http::request::Parts;

use crate::domain::FortuneContext;

/// Lets handlers take `Option<FortuneContext>` to read the request's fortune.
impl<S> OptionalFromRequestParts<S> for FortuneContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        Ok(parts.extensions.get::<FortuneContext>().cloned())
    }
}
