//! 3D product showcase.
//!
//! Each recommendation is a clickable object on a perspective stage,
//! placed by [`showcase::layout`]. Picking one spins it to the front and
//! scales it up; CSS transitions animate the change.

use leptos::prelude::*;

use crate::models::Recommendation;
use crate::models::showcase;

stylance::import_crate_style!(css, "src/components/showcase/showcase.module.css");

#[component]
pub fn Showcase(
    items: Vec<Recommendation>,
    #[prop(into)] selected: Signal<Option<usize>>,
    on_select: Callback<usize>,
) -> impl IntoView {
    let placements = showcase::layout(items.len());

    view! {
        <div class=css::stage>
            <div class=css::scene>
                {items
                    .into_iter()
                    .zip(placements)
                    .enumerate()
                    .map(|(i, (item, place))| {
                        let is_selected = move || selected.get() == Some(i);
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_selected() {
                                        format!("{} {}", css::object, css::selected)
                                    } else {
                                        css::object.to_string()
                                    }
                                }
                                style:transform=move || place.transform(is_selected())
                                title=item.reason
                                on:click=move |_| on_select.run(i)
                            >
                                <span class=css::name>{item.name}</span>
                                <span class=css::category>{item.category}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
