//! Hash-based routing

use crate::utils::dom;

/// Application routes.
/// URL format: `#/` (home) and `#/results`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Goal form: #/ or empty hash
    Home,
    /// Recommendations and shopping: #/results
    Results,
}

impl Route {
    /// Parse URL hash into Route. Unknown paths fall back to Home.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash
            .trim_start_matches('#')
            .trim_start_matches('/')
            .trim_end_matches('/');

        match path {
            "results" => Self::Results,
            _ => Self::Home,
        }
    }

    /// Convert Route to URL hash
    pub fn to_hash(self) -> &'static str {
        match self {
            Self::Home => "#/",
            Self::Results => "#/results",
        }
    }

    /// Get current route from browser URL
    pub fn current() -> Self {
        Self::from_hash(&dom::get_hash())
    }

    /// Navigate to this route. Fires `hashchange`, which the router listens for.
    pub fn go(self) {
        dom::set_hash(self.to_hash());
    }
}
