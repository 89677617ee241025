use crate::domain::Listing;
use maud::{html, Markup};

/// Icon name for a food type, picked by keyword.
pub fn food_icon(food_type: &str) -> &'static str {
    let t = food_type.to_lowercase();
    if t.contains("pizza") {
        "pizza"
    } else if t.contains("salad") || t.contains("vegetable") {
        "salad"
    } else if t.contains("bakery") || t.contains("bread") || t.contains("cake") {
        "cake"
    } else if t.contains("soup") || t.contains("stew") {
        "soup"
    } else {
        "utensils"
    }
}

/// Stroke paths for each icon on a 24x24 grid.
fn icon_paths(icon: &str) -> &'static [&'static str] {
    match icon {
        "pizza" => &[
            "M12 2C6.48 2 2 6.48 2 12s4.48 10 10 10 10-4.48 10-10S17.52 2 12 2zm0 18c-4.41 0-8-3.59-8-8s3.59-8 8-8 8 3.59 8 8-3.59 8-8 8z",
            "M12 4v5.5l4.5 2.5",
            "M12 12.5L7.5 15",
            "M12 12.5l4.5 2.5",
            "M12 12.5L7.5 10",
        ],
        "salad" => &[
            "M7 21h10",
            "M12 11a5 5 0 0 0-5 5h10a5 5 0 0 0-5-5z",
            "m6 11 2-9",
            "m18 11-2-9",
            "M12 2v2",
            "M12 16v5",
        ],
        "cake" => &[
            "m8 10 4-2 4 2",
            "M12 13V8",
            "M8.15 10.38a2 2 0 0 0-1.04-.44 2 2 0 0 0-2.02 2.6C6.14 15.2 12 17 12 17s5.86-1.8 6.91-4.46a2 2 0 0 0-2.02-2.6 2 2 0 0 0-1.04.44Z",
            "M12 17V19.5A1.5 1.5 0 0 1 10.5 21A1.5 1.5 0 0 1 9 19.5V17Z",
        ],
        "soup" => &[
            "M12 22c-2.2 0-4-2-4-3.5C8 15 12 3 12 3s4 12 4 15.5c0 1.5-1.8 3.5-4 3.5Z",
            "M6 20h12",
        ],
        _ => &[
            "M3 2v7c0 1.1.9 2 2 2h4a2 2 0 0 0 2-2V2",
            "M7 2v20",
            "M21 15V2a5 5 0 0 0-5 5v6c0 1.1.9 2 2 2h3Zm0 0v7",
        ],
    }
}

/// Inline SVG icon for a food type.
pub fn food_icon_svg(food_type: &str) -> Markup {
    let icon = food_icon(food_type);
    html! {
        svg
            class=(format!("icon icon-{icon}"))
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        {
            @for d in icon_paths(icon) {
                path d=(d) {}
            }
        }
    }
}

/// Card for the browse grid, ending in a link to the claim form.
pub fn listing_card(listing: &Listing) -> Markup {
    render_card(listing, true)
}

/// Same card without the claim link, for the claim page itself.
pub fn listing_summary(listing: &Listing) -> Markup {
    render_card(listing, false)
}

fn render_card(listing: &Listing, with_claim_link: bool) -> Markup {
    html! {
        article class="card listing-card" id=(format!("listing-{}", listing.id)) {
            @if let Some(src) = &listing.image_url {
                img class="listing-image" src=(src) alt=(listing.food_type) loading="lazy";
            }
            header {
                h3 { (listing.restaurant_name) }
                p class="food-type" {
                    (food_icon_svg(&listing.food_type))
                    span { (listing.food_type) }
                }
            }
            div class="card-body" {
                p { (listing.description) }
                ul class="listing-facts" {
                    li { "Quantity: " (listing.quantity) }
                    li { "Pickup: " (listing.pickup_time) }
                    li {
                        (listing.address)
                        @if let Some(distance) = &listing.distance {
                            " (" (distance) ")"
                        }
                    }
                }
            }
            @if with_claim_link {
                footer {
                    a class="btn accent wide" href=(format!("/listings/{}/claim", listing.id)) {
                        "View Details & Claim"
                    }
                }
            }
        }
    }
}
