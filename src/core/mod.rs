//! Core client logic: storage capabilities, response cache, identity,
//! page handoff and the backend API client.
//!
//! - [`ApiClient`] - `fetch_recommendations` / `search_products`
//! - [`SessionCache`], [`CacheKey`] - TTL response cache
//! - [`IdentityHolder`] - backend-issued user id
//! - [`TransferSlot`] - home → results handoff
//! - [`KeyValueStore`] - storage seam (browser or in-memory)

mod api;
pub mod cache;
pub mod clock;
pub mod error;
mod handoff;
mod identity;
pub mod storage;

pub use api::ApiClient;
pub use cache::{CacheKey, SessionCache};
pub use error::ApiError;
pub use handoff::{Handoff, TransferSlot};
pub use identity::IdentityHolder;
pub use storage::{BrowserStorage, KeyValueStore};
