use crate::domain::food_type::{DonationSize, FOOD_TYPE_OPTIONS};
use crate::domain::validation::window_from_suggestion;
use crate::domain::{FieldErrors, Listing, ListingForm};
use crate::suggestions::{DescriptionSuggestion, PickupTimeSuggestion};
use crate::templates::components::alert::{alert, AlertKind};
use crate::templates::components::form::{select, text_input, textarea, Field};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub struct CreateListingVm<'a> {
    pub form: &'a ListingForm,
    pub errors: &'a FieldErrors,
    /// Set right after a successful submit.
    pub created: Option<&'a Listing>,
}

pub fn create_listing_page(vm: &CreateListingVm<'_>) -> Markup {
    let form = vm.form;
    let errors = vm.errors;

    let food_types: Vec<(&str, &str)> = FOOD_TYPE_OPTIONS.iter().map(|o| (*o, *o)).collect();
    let sizes: Vec<(&str, &str)> = DonationSize::ALL
        .iter()
        .map(|s| (s.as_str(), s.label()))
        .collect();

    desktop_layout(
        "Create Listing",
        "/create-listing",
        html! {
            section class="card form-card" {
                h1 { "Create a New Food Listing" }
                p class="lead" { "Fill in the details of the surplus food you want to donate." }

                @if let Some(listing) = vm.created {
                    (alert(
                        AlertKind::Success,
                        "Listing Created!",
                        &format!("{} from {} has been successfully listed.", listing.food_type, listing.restaurant_name),
                    ))
                }
                @if !errors.is_empty() {
                    (alert(AlertKind::Error, "Please fix the highlighted fields.", "Your listing has not been created yet."))
                }

                form method="post" action="/create-listing" class="stack" novalidate {
                    (text_input(Field {
                        name: "restaurant_name",
                        label: "Restaurant Name",
                        value: &form.restaurant_name,
                        placeholder: "e.g., The Green Eatery",
                    }, "text", errors))

                    div class="grid two" {
                        (select(Field {
                            name: "food_type",
                            label: "Food Type / Category",
                            value: &form.food_type,
                            placeholder: "Select food type",
                        }, &food_types, errors))
                        (text_input(Field {
                            name: "quantity",
                            label: "Quantity",
                            value: &form.quantity,
                            placeholder: "e.g., 5 Pizzas, Approx 10 meals, 2kg",
                        }, "text", errors))
                    }

                    div class="with-suggestion" {
                        (textarea(Field {
                            name: "description",
                            label: "Description",
                            value: &form.description,
                            placeholder: "Briefly describe the food items, ingredients, or any special notes (e.g., vegetarian, contains nuts).",
                        }, None, errors))
                        button
                            type="button"
                            class="btn outline small"
                            hx-post="/create-listing/suggest-description"
                            hx-include="closest form"
                            hx-target="#description-suggestion"
                            hx-swap="innerHTML"
                            hx-indicator="#description-suggestion"
                        { "Suggest Description" }
                        div id="description-suggestion" aria-live="polite" {}
                    }

                    (text_input(Field {
                        name: "address",
                        label: "Pickup Address",
                        value: &form.address,
                        placeholder: "Full address for pickup",
                    }, "text", errors))

                    fieldset class="card inset" {
                        legend { "Pickup Scheduling" }
                        div class="grid two" {
                            (text_input(Field {
                                name: "closing_time",
                                label: "Restaurant Closing Time",
                                value: &form.closing_time,
                                placeholder: "HH:MM",
                            }, "time", errors))
                            (select(Field {
                                name: "donation_size",
                                label: "Estimated Donation Size",
                                value: &form.donation_size,
                                placeholder: "Select size",
                            }, &sizes, errors))
                        }
                        button
                            type="button"
                            class="btn outline wide"
                            hx-post="/create-listing/suggest-pickup-time"
                            hx-include="closest form"
                            hx-target="#pickup-suggestion"
                            hx-swap="innerHTML"
                        { "Suggest Pickup Time" }
                        div id="pickup-suggestion" aria-live="polite" {}

                        div class="grid two" {
                            (text_input(Field {
                                name: "pickup_window_start",
                                label: "Preferred Pickup Window Start",
                                value: &form.pickup_window_start,
                                placeholder: "HH:MM",
                            }, "time", errors))
                            (text_input(Field {
                                name: "pickup_window_end",
                                label: "Preferred Pickup Window End",
                                value: &form.pickup_window_end,
                                placeholder: "HH:MM",
                            }, "time", errors))
                        }
                        p class="hint" {
                            "Set your preferred pickup window or use the AI suggestion. "
                            "The suggested time can help you set a 30-minute window."
                        }
                    }

                    button type="submit" class="btn primary wide" { "Create Listing" }
                }
            }
        },
    )
}

pub fn description_suggestion(suggestion: &DescriptionSuggestion) -> Markup {
    html! {
        div class="suggestion" {
            p class="suggestion-title" { "AI Suggested Description:" }
            p { em { (suggestion.suggested_description) } }
            button
                type="button"
                class="btn link"
                data-value=(suggestion.suggested_description)
                onclick="document.getElementById('description').value = this.dataset.value"
            { "Use this description" }
        }
    }
}

pub fn pickup_suggestion(suggestion: &PickupTimeSuggestion) -> Markup {
    let window = window_from_suggestion(&suggestion.suggested_pickup_time);
    html! {
        div class="suggestion" {
            p class="suggestion-title" {
                "AI Suggestion: Pickup around "
                strong { (suggestion.suggested_pickup_time) }
                "."
            }
            p class="hint" { "Reasoning: " (suggestion.reasoning) }
            @if let Some((start, end)) = window {
                button
                    type="button"
                    class="btn link"
                    data-start=(start)
                    data-end=(end)
                    onclick="document.getElementById('pickup_window_start').value = this.dataset.start; document.getElementById('pickup_window_end').value = this.dataset.end"
                { "Use " (start) " - " (end) " as pickup window" }
            }
        }
    }
}

pub fn suggestion_unavailable(title: &str) -> Markup {
    alert(
        AlertKind::Error,
        title,
        "Could not get an AI suggestion. Please try again or enter it manually.",
    )
}

pub fn missing_information(body: &str) -> Markup {
    alert(AlertKind::Info, "Missing Information", body)
}
