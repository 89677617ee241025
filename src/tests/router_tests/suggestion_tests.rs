use crate::app::App;
use crate::router::handle;
use crate::store::ListingStore;
use crate::tests::utils::{body_string, post_form, seeded_app, FakeSuggestions};
use std::sync::atomic::Ordering;

fn answering_app() -> App {
    App::new(
        ListingStore::new(),
        Box::new(FakeSuggestions::answering(
            "Crusty sourdough and flaky croissants, baked this morning.",
            "21:45",
            "Shortly before closing, once service has wound down.",
        )),
    )
}

#[test]
fn description_suggestion_is_rendered() {
    let app = answering_app();
    let req = post_form(
        "/create-listing/suggest-description",
        &[("food_type", "Bakery (Bread, Pastries, Cakes)"), ("quantity", "2 boxes")],
    );

    let mut resp = handle(req, &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("AI Suggested Description:"));
    assert!(body.contains("Crusty sourdough and flaky croissants, baked this morning."));
    assert!(body.contains("Use this description"));
}

#[test]
fn pickup_suggestion_offers_thirty_minute_window() {
    let app = answering_app();
    let req = post_form(
        "/create-listing/suggest-pickup-time",
        &[
            ("closing_time", "22:00"),
            ("donation_size", "large"),
            ("food_type", "Desserts"),
        ],
    );

    let mut resp = handle(req, &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Pickup around <strong>21:45</strong>"));
    assert!(body.contains("Reasoning: Shortly before closing"));
    assert!(body.contains("data-start=\"21:45\""));
    assert!(body.contains("data-end=\"22:15\""));
}

#[test]
fn missing_inputs_skip_the_service() {
    let fake = FakeSuggestions::answering("x", "21:00", "y");
    let calls = fake.call_counter();
    let app = App::new(ListingStore::new(), Box::new(fake));

    let mut resp = handle(
        post_form("/create-listing/suggest-description", &[("food_type", "Desserts")]),
        &app,
    )
    .unwrap();
    assert!(body_string(&mut resp).contains("Missing Information"));

    let mut resp = handle(
        post_form(
            "/create-listing/suggest-pickup-time",
            &[("closing_time", "22:00"), ("donation_size", "huge"), ("food_type", "Desserts")],
        ),
        &app,
    )
    .unwrap();
    assert!(body_string(&mut resp).contains(
        "Please fill in Closing Time, Donation Size, and Food Type to get a time suggestion."
    ));

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn service_failure_means_suggestion_unavailable() {
    let app = seeded_app();

    let mut resp = handle(
        post_form(
            "/create-listing/suggest-description",
            &[("food_type", "Desserts"), ("quantity", "12 cupcakes")],
        ),
        &app,
    )
    .unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Error Suggesting Description"));
    assert!(body.contains("Please try again or enter it manually."));

    let mut resp = handle(
        post_form(
            "/create-listing/suggest-pickup-time",
            &[("closing_time", "22:00"), ("donation_size", "small"), ("food_type", "Desserts")],
        ),
        &app,
    )
    .unwrap();
    assert!(body_string(&mut resp).contains("Error Suggesting Time"));

    // Suggestions never touch the store.
    assert_eq!(app.store.len(), 5);
}
