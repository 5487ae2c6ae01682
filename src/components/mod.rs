//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`home`] - Goal form
//! - [`results`] - Recommendations and shopping
//! - [`showcase`] - 3D product objects
//! - [`listings`] - Shoppable listing grid
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod home;
pub mod icons;
pub mod listings;
pub mod results;
pub mod router;
pub mod showcase;

pub use router::AppRouter;
