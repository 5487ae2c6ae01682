//! Application router component.
//!
//! Hash routing driven by native `hashchange` events instead of
//! leptos_router. The URL hash is the source of truth; pages navigate with
//! [`Route::go`], and browser back/forward work automatically.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::home::HomePage;
use crate::components::results::ResultsPage;
use crate::models::Route;
use crate::utils::dom;

/// Main application router.
///
/// - `#/` → [`HomePage`]
/// - `#/results` → [`ResultsPage`]
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let route = ctx.route;

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(Route::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = dom::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move |_| {
        route.track();
        dom::scroll_to_top();
    });

    move || match route.get() {
        Route::Home => view! { <HomePage /> }.into_any(),
        Route::Results => view! { <ResultsPage /> }.into_any(),
    }
}
