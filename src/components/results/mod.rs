//! Results page: recommendations, 3D showcase and shoppable listings.
//!
//! Takes the [`Handoff`] left by the home page on mount; arriving without
//! one (reload, direct link) goes back home. Picking a product searches for
//! it, served from the session cache when it was searched recently. Any
//! search failure also goes back home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::components::listings::ListingGrid;
use crate::components::showcase::Showcase;
use crate::config::RESULTS_PAGE_MAX_RESULTS;
use crate::core::{ApiClient, Handoff, TransferSlot};
use crate::models::{Recommendation, Route, SearchResult};
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/results/results.module.css");

/// State of the listings panel.
#[derive(Clone, Debug, PartialEq)]
enum SearchState {
    /// Nothing picked yet.
    Idle,
    /// Waiting on listings for this product name.
    Loading(String),
    Ready(SearchResult),
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    match TransferSlot::browser().take() {
        Some(handoff) => view! { <Results handoff=handoff /> }.into_any(),
        None => {
            Route::Home.go();
            ().into_any()
        }
    }
}

#[component]
fn Results(handoff: Handoff) -> impl IntoView {
    let Handoff { goal, result } = handoff;
    let items = result.items;

    let selected = RwSignal::new(None::<usize>);
    let search = RwSignal::new(SearchState::Idle);

    let on_select = {
        let items = items.clone();
        Callback::new(move |index: usize| {
            let Some(item) = items.get(index) else {
                return;
            };
            let name = item.name.clone();

            selected.set(Some(index));
            search.set(SearchState::Loading(name.clone()));

            spawn_local(async move {
                let outcome = ApiClient::browser()
                    .search_products(&name, Some(RESULTS_PAGE_MAX_RESULTS))
                    .await;

                // A later pick supersedes this one.
                let still_wanted = search
                    .try_with_untracked(|s| matches!(s, SearchState::Loading(n) if *n == name))
                    .unwrap_or(false);
                if !still_wanted {
                    return;
                }

                match outcome {
                    Ok(found) => search.set(SearchState::Ready(found)),
                    Err(e) => {
                        console::error(&format!("search for {:?} failed: {}", name, e));
                        Route::Home.go();
                    }
                }
            });
        })
    };

    let on_back = move |_: leptos::ev::MouseEvent| Route::Home.go();
    let has_items = !items.is_empty();
    let showcase_items = items.clone();

    view! {
        <main class=css::page>
            <nav class=css::nav>
                <button type="button" class=css::back on:click=on_back>
                    <Icon icon=ic::BACK />
                    "New goal"
                </button>
                {result.mode.map(|mode| view! { <span class=css::mode>{mode}</span> })}
            </nav>

            <header class=css::header>
                <p class=css::goal>"\u{201c}" {goal} "\u{201d}"</p>
                <p class=css::analysis>{result.analysis_text}</p>
            </header>

            <Show
                when=move || has_items
                fallback=|| view! {
                    <p class=css::empty>"No suggestions this time. Try describing your goal differently."</p>
                }
            >
                <Showcase items=showcase_items.clone() selected=selected on_select=on_select />
            </Show>

            <ul class=css::list>
                {items
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(i, item)| view! {
                        <RecommendationRow
                            item=item
                            active=Signal::derive(move || selected.get() == Some(i))
                            on_pick=Callback::new(move |_| on_select.run(i))
                        />
                    })
                    .collect_view()}
            </ul>

            <section class=css::shop>
                {move || match search.get() {
                    SearchState::Idle => view! {
                        <p class=css::hint>
                            <Icon icon=ic::SHOP />
                            "Pick something to see where to buy it."
                        </p>
                    }
                    .into_any(),
                    SearchState::Loading(name) => view! {
                        <p class=css::hint>
                            <span class=css::spinner></span>
                            "Finding shops for " <strong>{name}</strong> "..."
                        </p>
                    }
                    .into_any(),
                    SearchState::Ready(found) => view! { <ListingGrid result=found /> }.into_any(),
                }}
            </section>
        </main>
    }
}

#[component]
fn RecommendationRow(
    item: Recommendation,
    #[prop(into)] active: Signal<bool>,
    on_pick: Callback<()>,
) -> impl IntoView {
    view! {
        <li
            class=move || if active.get() { format!("{} {}", css::row, css::active) } else { css::row.to_string() }
            on:click=move |_| on_pick.run(())
        >
            <div class=css::rowHead>
                <span class=css::name>{item.name}</span>
                <span class=css::category>{item.category}</span>
            </div>
            <p class=css::reason>{item.reason}</p>
            <span class=css::cta>
                <Icon icon=ic::STAR />
                "Shop this"
            </span>
        </li>
    }
}
