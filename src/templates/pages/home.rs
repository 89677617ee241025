// templates/pages/home.rs

use crate::templates::{
    components::{button, card},
    desktop_layout,
};
use maud::{html, Markup};

const STEPS: &[(&str, &str)] = &[
    (
        "1. Restaurants List Surplus",
        "Eateries list the food they have left, how much there is, and when it can be picked up, using one short form.",
    ),
    (
        "2. Get Pickup Suggestions",
        "An AI scheduling assistant proposes a pickup time from closing hours and donation size, so food is collected while it is fresh.",
    ),
    (
        "3. Communities Collect",
        "Charities and individuals browse what is on offer and arrange a pickup, so good food reaches the people who need it.",
    ),
];

pub fn home_page() -> Markup {
    desktop_layout(
        "Home",
        "/",
        html! {
            section class="hero" {
                h1 { "Welcome to PlateShare" }
                p class="lead" {
                    "Connecting restaurants that have surplus food with the communities that need it. "
                    "Cut waste and fight hunger, one plate at a time."
                }
                div class="actions" {
                    (button("Find Food Donations", "/browse", "accent"))
                    (button("Share Your Surplus", "/create-listing", "outline"))
                }
            }

            section class="how-it-works" {
                h2 { "How PlateShare Works" }
                div class="grid three" {
                    @for (title, body) in STEPS {
                        (card(title, html! { p { (body) } }))
                    }
                }
            }

            section class="join" {
                h2 { "Join the Movement" }
                p {
                    "Every shared meal is a step toward a more sustainable and fairer food system. "
                    "PlateShare lets you be part of it."
                }
            }
        },
    )
}
