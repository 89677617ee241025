// src/tests/router_tests/browse_tests.rs
use crate::domain::listing::NewListing;
use crate::router::handle;
use crate::tests::utils::{body_string, get, seeded_app};

fn new_listing(name: &str, food_type: &str) -> NewListing {
    NewListing {
        restaurant_name: name.into(),
        food_type: food_type.into(),
        description: "Hot and ready".into(),
        quantity: "3 trays".into(),
        pickup_window_start: "20:00".into(),
        pickup_window_end: "20:30".into(),
        address: "9 Side St".into(),
    }
}

#[test]
fn browse_lists_every_seeded_listing() {
    let app = seeded_app();
    let mut resp = handle(get("/browse"), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    for name in [
        "Green Leaf Cafe",
        "The Daily Bread Bakery",
        "Pizza Palace",
        "Mama Mia Pasta",
        "Sushi Central",
    ] {
        assert!(body.contains(name), "missing {name}");
    }
    assert!(body.contains("All Food Types"));
    assert!(body.contains("/listings/3/claim"));
    assert!(!body.contains("Clear filters"));
}

#[test]
fn search_filters_results() {
    let app = seeded_app();
    let mut resp = handle(get("/browse?q=SUSHI&food_type=all"), &app).unwrap();
    let body = body_string(&mut resp);

    assert!(body.contains("/listings/5/claim"));
    // Pizza Palace also appears in the search placeholder, so check its card link.
    assert!(!body.contains("/listings/3/claim"));
    assert!(body.contains("Clear filters"));
}

#[test]
fn food_type_filter_and_encoded_query() {
    let app = seeded_app();
    let mut resp = handle(get("/browse/results?q=&food_type=pasta"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("Mama Mia Pasta"));
    assert!(!body.contains("Green Leaf Cafe"));

    let mut resp = handle(get("/browse/results?q=baked+fresh"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("The Daily Bread Bakery"));
    assert!(!body.contains("Sushi Central"));
}

#[test]
fn no_matches_shows_empty_state() {
    let app = seeded_app();
    let mut resp = handle(get("/browse?q=caviar"), &app).unwrap();
    let body = body_string(&mut resp);
    assert!(body.contains("No listings found matching your criteria."));
}

#[test]
fn new_listing_appears_first() {
    let app = seeded_app();
    app.store
        .add_listing(new_listing("Taco Town", "Mexican (Tacos, Burritos)"))
        .unwrap();

    let mut resp = handle(get("/browse"), &app).unwrap();
    let body = body_string(&mut resp);

    let taco = body.find("Taco Town").unwrap();
    let cafe = body.find("Green Leaf Cafe").unwrap();
    assert!(taco < cafe);
    assert!(body.contains("<option value=\"mexican\""));
}

#[test]
fn results_fragment_revalidates_by_revision() {
    let app = seeded_app();

    let resp = handle(get("/browse/results"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let etag = resp
        .headers()
        .get("ETag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(etag, app.etag());
    assert!(etag.ends_with("-rev-0\""));

    let conditional = |tag: &str| {
        http::Request::builder()
            .method(http::Method::GET)
            .uri("/browse/results")
            .header("If-None-Match", tag)
            .body(astra::Body::empty())
            .unwrap()
    };

    let resp = handle(conditional(&etag), &app).unwrap();
    assert_eq!(resp.status(), 304);

    app.store.add_listing(new_listing("Late Bistro", "Other")).unwrap();

    let mut resp = handle(conditional(&etag), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("ETag").unwrap(), app.etag().as_str());
    assert!(app.etag().ends_with("-rev-1\""));
    assert!(body_string(&mut resp).contains("Late Bistro"));
}

#[test]
fn results_tag_from_another_run_is_not_reused() {
    let earlier = seeded_app();
    earlier
        .store
        .add_listing(new_listing("Gone Diner", "Other"))
        .unwrap();
    let stale_tag = earlier.etag();

    let current = seeded_app();
    current
        .store
        .add_listing(new_listing("Fresh Bistro", "Other"))
        .unwrap();
    assert_eq!(earlier.revision(), current.revision());
    assert_ne!(stale_tag, current.etag());

    let req = http::Request::builder()
        .method(http::Method::GET)
        .uri("/browse/results")
        .header("If-None-Match", stale_tag.as_str())
        .body(astra::Body::empty())
        .unwrap();
    let mut resp = handle(req, &current).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(&mut resp);
    assert!(body.contains("Fresh Bistro"));
    assert!(!body.contains("Gone Diner"));
}
