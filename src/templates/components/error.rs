use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Full error page; the status is echoed in the heading.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("Error {status}"),
        "",
        html! {
            section class="error-page" {
                h1 { "Error " (status) }
                p { (message) }
                p { a href="/" { "← Back to home" } }
            }
        },
    )
}
