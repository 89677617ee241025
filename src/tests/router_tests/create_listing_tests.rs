// src/tests/router_tests/create_listing_tests.rs
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, seeded_app};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn valid_fields() -> Vec<(&'static str, &'static str)> {
    vec![
        ("restaurant_name", "Test Cafe"),
        ("food_type", "Bakery (Bread, Pastries, Cakes)"),
        ("description", "Fresh bread baked this morning"),
        ("quantity", "2 boxes"),
        ("donation_size", "small"),
        ("closing_time", "22:00"),
        ("pickup_window_start", "16:00"),
        ("pickup_window_end", "17:00"),
        ("address", "1 Main St"),
    ]
}

fn with(field: &'static str, value: &'static str) -> Vec<(&'static str, &'static str)> {
    valid_fields()
        .into_iter()
        .map(|(k, v)| if k == field { (k, value) } else { (k, v) })
        .collect()
}

#[test]
fn form_page_defaults_closing_time() {
    let app = seeded_app();
    let mut resp = handle(get("/create-listing"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Create a New Food Listing"));
    assert!(body.contains("value=\"22:00\""));
    assert!(body.contains("Italian (Pizza, Pasta)"));
    assert!(body.contains("Medium (6-15 servings)"));
}

#[test]
fn valid_submission_adds_listing_first() {
    let app = seeded_app();
    let notified = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&notified);
    app.store.subscribe(Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    }));

    let mut resp = handle(post_form("/create-listing", &valid_fields()), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(&mut resp);
    assert!(body.contains("Listing Created!"));
    assert!(body.contains(
        "Bakery (Bread, Pastries, Cakes) from Test Cafe has been successfully listed."
    ));
    // Form is reset after success.
    assert!(!body.contains("value=\"Test Cafe\""));

    let listings = app.store.get_listings();
    assert_eq!(listings.len(), 6);
    assert_eq!(listings[0].restaurant_name, "Test Cafe");
    assert_eq!(listings[0].pickup_time, "16:00 - 17:00");
    assert_eq!(notified.load(Ordering::SeqCst), 1);
    assert_eq!(app.revision(), 1);
}

#[test]
fn invalid_submission_keeps_values_and_store() {
    let app = seeded_app();
    let fields = with("pickup_window_end", "15:00");

    let mut resp = handle(post_form("/create-listing", &fields), &app).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_string(&mut resp);
    assert!(body.contains("Pickup start time must be before end time."));
    assert!(body.contains("value=\"Test Cafe\""));
    assert_eq!(app.store.len(), 5);
    assert_eq!(app.revision(), 0);
}

#[test]
fn bad_time_and_short_name_are_reported() {
    let app = seeded_app();
    let mut fields = with("closing_time", "10pm");
    fields.retain(|(k, _)| *k != "restaurant_name");
    fields.push(("restaurant_name", "X"));

    let mut resp = handle(post_form("/create-listing", &fields), &app).unwrap();
    assert_eq!(resp.status(), 400);

    let body = body_string(&mut resp);
    assert!(body.contains("Invalid time format (HH:MM)."));
    assert!(body.contains("Restaurant name must be at least 2 characters."));
    assert_eq!(app.store.len(), 5);
}

#[test]
fn blank_name_is_rejected_by_store() {
    let app = seeded_app();
    let fields = with("restaurant_name", "   ");

    let mut resp = handle(post_form("/create-listing", &fields), &app).unwrap();
    assert_eq!(resp.status(), 400);
    assert!(body_string(&mut resp).contains("restaurant name must not be empty"));
    assert_eq!(app.store.len(), 5);
}

#[test]
fn identical_submissions_get_distinct_ids() {
    let app = seeded_app();
    handle(post_form("/create-listing", &valid_fields()), &app).unwrap();
    handle(post_form("/create-listing", &valid_fields()), &app).unwrap();

    let listings = app.store.get_listings();
    assert_eq!(listings.len(), 7);
    assert_ne!(listings[0].id, listings[1].id);
}
