//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! The backend base URL can be overridden at compile time with `VIBE_API_URL`.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the header.
pub const APP_NAME: &str = "vibe.shop";

/// Tagline displayed under the goal form.
pub const APP_TAGLINE: &str = "Tell us what you're going for. We'll find the things that get you there.";

// =============================================================================
// Network Configuration
// =============================================================================

/// Backend address used when `VIBE_API_URL` is not set at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the recommendation backend (no trailing slash).
pub fn api_base_url() -> &'static str {
    option_env!("VIBE_API_URL")
        .map(|url| url.trim_end_matches('/'))
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
}

/// Backend endpoint names, also used as cache key namespaces.
pub mod endpoints {
    pub const RECOMMEND: &str = "recommend";
    pub const SEARCH_PRODUCTS: &str = "search-products";
}

/// Default `max_results` for product search.
pub const DEFAULT_MAX_RESULTS: u32 = 10;

/// Number of listings requested when a product is picked on the results page.
pub const RESULTS_PAGE_MAX_RESULTS: u32 = 6;

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// Prefix for every sessionStorage key written by the response cache.
    pub const KEY_PREFIX: &str = "vibe-cache:";

    /// Entries older than this are evicted on read (24 hours).
    pub const TTL_MILLIS: u64 = 24 * 60 * 60 * 1000;
}

// =============================================================================
// Persistent Storage Keys
// =============================================================================

/// localStorage key holding the backend-issued user identifier.
pub const USER_ID_KEY: &str = "vibe_user_id";

/// localStorage key for the one-shot home → results handoff.
pub const HANDOFF_KEY: &str = "vibe_handoff";

// =============================================================================
// Error Messages
// =============================================================================

/// Fallback messages when the backend gives no `detail`.
pub mod messages {
    pub const RECOMMEND_FAILED: &str = "Failed to get recommendations";
    pub const SEARCH_FAILED: &str = "Failed to search products";
    pub const SEARCH_UNSUCCESSFUL: &str = "Product search was unsuccessful";
}

// =============================================================================
// Showcase Configuration
// =============================================================================

/// 3D showcase layout constants.
pub mod showcase {
    /// Horizontal distance between neighbouring slots (px).
    pub const SLOT_SPACING: f64 = 220.0;
    /// Depth offset applied to every other row (px).
    pub const ROW_DEPTH: f64 = -160.0;
    /// Items per row.
    pub const ROW_WIDTH: usize = 3;
    /// Vertical distance between rows (px).
    pub const ROW_HEIGHT: f64 = 200.0;
    /// Resting Y rotation, alternating sign per column (degrees).
    pub const REST_YAW: f64 = 18.0;
    /// Y rotation of the selected item (degrees).
    pub const SELECTED_YAW: f64 = 360.0;
    /// Scale of the selected item.
    pub const SELECTED_SCALE: f64 = 1.25;
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
