//! Root application module.
//!
//! Contains the main App component and the AppContext definition,
//! following Leptos conventions.

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::models::Route;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// The API client itself is not stored here: it wraps browser handles that
/// are not `Send`, and it is cheap to build, so pages create one per action
/// with [`ApiClient::browser`](crate::core::ApiClient::browser).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current route, kept in sync with the URL hash by the router.
    pub route: RwSignal<Route>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(Route::current()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Wraps the app in an ErrorBoundary for graceful error handling
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #14101f;
                    color: #ece8f5;
                    font-family: system-ui, sans-serif;
                ">
                    <div style="max-width: 600px; text-align: center;">
                        <h1 style="color: #ff7a90; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a49cb8; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <ul style="text-align: left; color: #ff7a90; font-size: 0.9rem;">
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #8a5cf6;
                                color: white;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 999px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}
