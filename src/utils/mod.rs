//! Utility modules for web, DOM, and display operations.
//!
//! Provides:
//! - [`console`] - Browser console logging (no-op off wasm)
//! - [`dom`] - window, storage and hash navigation helpers
//! - [`fetch`] - `HttpTransport` seam and the Fetch API transport
//! - [`format`] - price, rating and count formatting

pub mod console;
pub mod dom;
pub mod fetch;
pub mod format;
