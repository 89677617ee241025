use maud::{html, Markup};

pub mod alert;
pub mod card;
pub mod error;
pub mod form;

pub use card::{listing_card, listing_summary};
pub use error::error_page;

pub fn button(label: &str, href: &str, class: &str) -> Markup {
    html! {
        a class=(format!("btn {class}")) href=(href) { (label) }
    }
}

pub fn card(title: &str, body: Markup) -> Markup {
    html! {
        div class="card" {
            h2 { (title) }
            div class="card-body" {
                (body)
            }
        }
    }
}
