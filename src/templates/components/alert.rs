use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Info,
    Error,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Success => "alert success",
            AlertKind::Info => "alert info",
            AlertKind::Error => "alert error",
        }
    }
}

/// Inline stand-in for a toast notification.
pub fn alert(kind: AlertKind, title: &str, body: &str) -> Markup {
    html! {
        div class=(kind.class()) role=(if kind == AlertKind::Error { "alert" } else { "status" }) {
            strong { (title) }
            p { (body) }
        }
    }
}
