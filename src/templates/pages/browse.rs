use crate::domain::filter::{food_type_options, ListingFilter, ALL_FOOD_TYPES};
use crate::domain::Listing;
use crate::templates::{desktop_layout, listing_card};
use maud::{html, Markup};
use url::form_urlencoded;

fn results_url(filter: &ListingFilter) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("q", &filter.search)
        .append_pair("food_type", &filter.food_type)
        .finish();
    format!("/browse/results?{query}")
}

pub fn browse_page(all: &[Listing], filter: &ListingFilter, revision: u64) -> Markup {
    let options = food_type_options(all);
    let selected = filter.food_type.to_lowercase();
    let visible = filter.apply(all);

    desktop_layout(
        "Browse Food",
        "/browse",
        html! {
            section class="browse-header" {
                h1 { "Find Surplus Food Near You" }

                form
                    class="filters"
                    method="get"
                    action="/browse"
                    hx-get="/browse/results"
                    hx-target="#results"
                    hx-swap="outerHTML"
                    hx-trigger="input changed delay:300ms from:#search, change from:#food_type"
                {
                    div class="field" {
                        label for="search" { "Search by Name, Food Type, or Description" }
                        input
                            type="search"
                            id="search"
                            name="q"
                            value=(filter.search)
                            placeholder="e.g., Pizza Palace, Sandwiches, or Freshly Baked";
                    }
                    div class="field" {
                        label for="food_type" { "Filter by Food Category" }
                        select id="food_type" name="food_type" {
                            @for food_type in &options {
                                @let value = food_type.to_lowercase();
                                @let is_all = food_type.as_str() == ALL_FOOD_TYPES;
                                option
                                    value=(value)
                                    selected[value == selected || (selected.is_empty() && is_all)]
                                {
                                    @if is_all { "All Food Types" } @else { (food_type) }
                                }
                            }
                        }
                    }
                    noscript { button type="submit" class="btn" { "Apply" } }
                    @if filter.is_active() {
                        a class="btn link" href="/browse" { "Clear filters" }
                    }
                }
            }

            (browse_results(&visible, filter, revision))
        },
    )
}

/// Results grid. Swapped in by htmx on filter changes and polled so new
/// listings show up without a reload.
pub fn browse_results(visible: &[&Listing], filter: &ListingFilter, revision: u64) -> Markup {
    html! {
        section
            id="results"
            data-revision=(revision)
            hx-get=(results_url(filter))
            hx-trigger="every 15s"
            hx-swap="outerHTML"
        {
            @if visible.is_empty() {
                div class="empty-state" {
                    p class="lead" { "No listings found matching your criteria." }
                    p { "Try adjusting your search or filters, or check back later for new donations!" }
                }
            } @else {
                div class="grid three" {
                    @for listing in visible {
                        (listing_card(listing))
                    }
                }
            }
        }
    }
}
