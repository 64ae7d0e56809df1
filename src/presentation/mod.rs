pub mod config;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use config::{Environment, FortuneCookieSettings, Settings, SettingsError};
pub use middleware::{
    FortuneCookieState, fortune_cookie_middleware, fortune_cookie_route, fortune_cookie_router,
};
pub use router::create_router;
pub use state::AppState;
