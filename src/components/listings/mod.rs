//! Shoppable listing grid.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{Listing, SearchResult};
use crate::utils::format::{format_price, format_rating, format_reviews};

stylance::import_crate_style!(css, "src/components/listings/listings.module.css");

/// Grid of listings for one search.
#[component]
pub fn ListingGrid(result: SearchResult) -> impl IntoView {
    let summary = format!(
        "{} of {} results for \"{}\"",
        result.items.len(),
        result.total_count,
        result.search_term
    );

    if result.items.is_empty() {
        return view! {
            <p class=css::empty>"No shops carry this right now. Try another pick."</p>
        }
        .into_any();
    }

    view! {
        <section>
            <p class=css::summary>{summary}</p>
            <div class=css::grid>
                {result
                    .items
                    .into_iter()
                    .map(|listing| view! { <ListingCard listing=listing /> })
                    .collect_view()}
            </div>
        </section>
    }
    .into_any()
}

#[component]
fn ListingCard(listing: Listing) -> impl IntoView {
    let price = format_price(listing.price, &listing.currency);
    let rating = format_rating(listing.rating);
    let reviews = format_reviews(listing.reviews);
    let seller = listing.source.unwrap_or(listing.platform);
    let image = (!listing.image.is_empty()).then_some(listing.image);
    let title = listing.title;

    view! {
        <a class=css::card href=listing.url target="_blank" rel="noopener noreferrer">
            <div class=css::thumb>
                {image.map(|src| view! { <img src=src alt=title.clone() loading="lazy" /> })}
            </div>
            <div class=css::body>
                <span class=css::title>{title.clone()}</span>
                <span class=css::price>{price}</span>
                <span class=css::meta>
                    {seller}
                    {listing.condition.map(|c| view! { <span class=css::tag>{c}</span> })}
                </span>
                {rating.map(|r| view! {
                    <span class=css::rating>
                        {r}
                        {reviews.map(|n| view! { <span class=css::reviews>{n}</span> })}
                    </span>
                })}
            </div>
            <span class=css::external><Icon icon=ic::EXTERNAL_LINK /></span>
        </a>
    }
}
