//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowLeft as Back, LuExternalLink as ExternalLink, LuRotateCcw as Reset,
        LuSearch as Search, LuShoppingBag as Shop, LuSparkles as Sparkles, LuStar as Star,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowCounterclockwise as Reset, BsArrowLeft as Back, BsBagFill as Shop,
        BsBoxArrowUpRight as ExternalLink, BsSearch as Search, BsStars as Sparkles,
        BsStarFill as Star,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(BACK, Back);
themed_icon!(EXTERNAL_LINK, ExternalLink);
themed_icon!(RESET, Reset);
themed_icon!(SEARCH, Search);
themed_icon!(SHOP, Shop);
themed_icon!(SPARKLES, Sparkles);
themed_icon!(STAR, Star);
