//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`RecommendationResult`], [`Recommendation`] - AI suggestions for a goal
//! - [`SearchResult`], [`Listing`] - shoppable listings for one product
//! - [`Route`] - Hash-based navigation
//! - [`showcase`] - Fixed 3D layout for the product showcase

mod listing;
mod recommendation;
mod route;
pub mod schema;
pub mod showcase;

pub use listing::{Listing, SearchOutcome, SearchRequest, SearchResult};
pub use recommendation::{Recommendation, RecommendRequest, RecommendationResult};
pub use route::Route;
