use crate::domain::{ClaimForm, FieldErrors, Listing};
use crate::templates::components::alert::{alert, AlertKind};
use crate::templates::components::form::{radio_group, text_input, textarea, Field};
use crate::templates::{desktop_layout, listing_summary};
use maud::{html, Markup};

pub fn claim_page(listing: &Listing, form: &ClaimForm, errors: &FieldErrors) -> Markup {
    desktop_layout(
        "Claim Food",
        "/browse",
        html! {
            div class="grid two claim" {
                (listing_summary(listing))

                section class="card form-card" {
                    h1 { "Claim from " (listing.restaurant_name) }
                    p class="lead" { "Tell the restaurant who is collecting and how to reach you." }

                    @if !errors.is_empty() {
                        (alert(AlertKind::Error, "Please fix the highlighted fields.", "Your claim has not been sent yet."))
                    }

                    form method="post" action=(format!("/listings/{}/claim", listing.id)) class="stack" novalidate {
                        (text_input(Field {
                            name: "name",
                            label: "Full Name",
                            value: &form.name,
                            placeholder: "e.g., John Doe",
                        }, "text", errors))
                        (textarea(Field {
                            name: "location",
                            label: "Your Location / Address for Pickup",
                            value: &form.location,
                            placeholder: "e.g., 123 Community Rd, Anytown, or general area for coordination",
                        }, Some("Provide an address or general location for pickup coordination."), errors))
                        (text_input(Field {
                            name: "phone_number",
                            label: "Phone Number",
                            value: &form.phone_number,
                            placeholder: "e.g., 5551234567",
                        }, "tel", errors))
                        (radio_group(Field {
                            name: "claimant_type",
                            label: "Are you claiming as an individual or an organisation?",
                            value: &form.claimant_type,
                            placeholder: "",
                        }, &[("individual", "Individual"), ("organisation", "Organisation")], errors))

                        div class="actions end" {
                            a class="btn outline" href="/browse" { "Cancel" }
                            button type="submit" class="btn primary" { "Submit Claim" }
                        }
                    }
                }
            }
        },
    )
}

pub fn claim_confirmation_page(restaurant_name: &str) -> Markup {
    desktop_layout(
        "Claim Submitted",
        "/browse",
        html! {
            section class="card form-card" {
                (alert(
                    AlertKind::Success,
                    "Claim Submitted!",
                    &format!("Your request to claim food from {restaurant_name} has been received."),
                ))
                p { a class="btn accent" href="/browse" { "Back to listings" } }
            }
        },
    )
}
