use axum::Router;
use axum::middleware;
use axum::response::Response;
use axum::routing::MethodRouter;

use crate::domain::FortuneCookie;

/// Opts a single handler into fortune augmentation.
pub fn fortune_cookie_route<S>(method_router: MethodRouter<S>) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    method_router.layer(middleware::map_response(mark_handler_response))
}

/// Opts every route of `router` into fortune augmentation.
pub fn fortune_cookie_router<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::map_response(mark_router_response))
}

// Handler markers sit closer to the handler, so they are recorded first and win.
async fn mark_handler_response(response: Response) -> Response {
    mark(response, FortuneCookie::handler())
}

async fn mark_router_response(response: Response) -> Response {
    mark(response, FortuneCookie::router())
}

fn mark(mut response: Response, marker: FortuneCookie) -> Response {
    if response.extensions().get::<FortuneCookie>().is_none() {
        response.extensions_mut().insert(marker);
    }
    response
}
