//! Home page: collects the goal and fetches recommendations.
//!
//! On success the result and the goal text go into the [`TransferSlot`]
//! and the app navigates to `#/results`. Failures stay on this page and
//! are shown inline.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::core::{ApiClient, Handoff, TransferSlot};
use crate::models::Route;
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

/// Goal prompts offered as one-click starting points.
const SUGGESTIONS: &[&str] = &[
    "host dinner parties",
    "get into trail running",
    "make my desk feel cozy",
    "start a balcony garden",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (goal, set_goal) = signal(String::new());
    let (preference, set_preference) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<&'static str>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }

        let goal_text = goal.get_untracked();
        let preference_text = preference.get_untracked();
        set_error.set(None);
        set_notice.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let client = ApiClient::browser();
            let preference = Some(preference_text.as_str()).filter(|p| !p.trim().is_empty());

            match client.fetch_recommendations(&goal_text, preference).await {
                Ok(result) => {
                    let handoff = Handoff {
                        goal: goal_text,
                        result,
                    };
                    if TransferSlot::browser().put(&handoff) {
                        Route::Results.go();
                    } else {
                        set_error.set(Some(
                            "Your browser blocked storage, so results can't be shown.".to_string(),
                        ));
                        set_loading.set(false);
                    }
                }
                Err(e) => {
                    console::error(&format!("recommendations failed: {}", e));
                    set_error.set(Some(e.user_message()));
                    set_loading.set(false);
                }
            }
        });
    };

    let on_reset = move |_: leptos::ev::MouseEvent| {
        let client = ApiClient::browser();
        client.cache().clear();
        client.identity().clear();
        set_notice.set(Some("Fresh start: saved results and your history were cleared."));
    };

    view! {
        <main class=css::page>
            <header class=css::hero>
                <h1 class=css::title>
                    <Icon icon=ic::SPARKLES />
                    {APP_NAME}
                </h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </header>

            <form class=css::form on:submit=on_submit>
                <label class=css::label>"What's your goal?"</label>
                <textarea
                    id="goal"
                    class=css::goal
                    rows="3"
                    placeholder="e.g. host dinner parties"
                    prop:value=move || goal.get()
                    on:input=move |ev| set_goal.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />

                <label class=css::label>"Anything we should know? (optional)"</label>
                <input
                    id="preference"
                    class=css::preference
                    type="text"
                    placeholder="budget, style, size..."
                    prop:value=move || preference.get()
                    on:input=move |ev| set_preference.set(event_target_value(&ev))
                    disabled=move || loading.get()
                />

                <div class=css::chips>
                    {SUGGESTIONS
                        .iter()
                        .map(|s| {
                            view! {
                                <button
                                    type="button"
                                    class=css::chip
                                    on:click=move |_| set_goal.set(s.to_string())
                                    disabled=move || loading.get()
                                >
                                    {*s}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <button
                    type="submit"
                    class=css::submit
                    disabled=move || loading.get() || goal.with(|g| g.trim().is_empty())
                >
                    <Show
                        when=move || loading.get()
                        fallback=|| view! { <Icon icon=ic::SEARCH /> "Find my things" }
                    >
                        <span class=css::spinner></span>
                        "Reading your vibe..."
                    </Show>
                </button>
            </form>

            <Show when=move || error.get().is_some()>
                <p class=css::error role="alert">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <footer class=css::footer>
                <button type="button" class=css::reset on:click=on_reset>
                    <Icon icon=ic::RESET />
                    "Start over"
                </button>
                <Show when=move || notice.get().is_some()>
                    <span class=css::notice>{move || notice.get().unwrap_or_default()}</span>
                </Show>
            </footer>
        </main>
    }
}
