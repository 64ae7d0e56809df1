use crate::presentation::middleware::FortuneCookieState;

#[derive(Clone)]
pub struct AppState {
    pub fortune: FortuneCookieState,
}

impl AppState {
    pub fn new(fortune: FortuneCookieState) -> Self {
        Self { fortune }
    }
}
