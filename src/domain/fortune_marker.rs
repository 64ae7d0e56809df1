/// Where the opt-in marker was attached when the route was registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerScope {
    Handler,
    Router,
}

/// Opt-in marker. Carried in response extensions by routes registered with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneCookie {
    pub scope: MarkerScope,
}

impl FortuneCookie {
    pub fn handler() -> Self {
        Self {
            scope: MarkerScope::Handler,
        }
    }

    pub fn router() -> Self {
        Self {
            scope: MarkerScope::Router,
        }
    }
}

/// Set on a response once it has been decorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FortuneApplied;
