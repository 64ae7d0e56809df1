mod fortune_extractor;
mod fortune_middleware;
mod marker;

pub use fortune_middleware::{FortuneCookieState, fortune_cookie_middleware};
pub use marker::{fortune_cookie_route, fortune_cookie_router};
