// src/tests/router_tests/page_tests.rs
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, post_form, seeded_app};

#[test]
fn home_page_renders() {
    let app = seeded_app();
    let mut resp = handle(get("/"), &app).unwrap();

    assert_eq!(resp.status(), 200);
    let content_type = resp.headers().get("Content-Type").unwrap().to_str().unwrap();
    assert!(content_type.starts_with("text/html"));

    let body = body_string(&mut resp);
    assert!(body.contains("Welcome to PlateShare"));
    assert!(body.contains("href=\"/browse\""));
    assert!(body.contains("href=\"/create-listing\""));
}

#[test]
fn unknown_path_is_not_found() {
    let app = seeded_app();
    let err = handle(get("/nowhere"), &app).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn wrong_method_on_claim_path() {
    let app = seeded_app();
    let req = http::Request::builder()
        .method(http::Method::DELETE)
        .uri("/listings/1/claim")
        .body(astra::Body::empty())
        .unwrap();
    let err = handle(req, &app).unwrap_err();
    assert!(matches!(err, ServerError::MethodNotAllowed));
}

#[test]
fn post_to_home_is_not_found() {
    let app = seeded_app();
    let err = handle(post_form("/", &[]), &app).unwrap_err();
    assert_eq!(err.status(), 404);
}

#[test]
fn error_page_carries_status() {
    let mut resp = crate::responses::html_error_response(ServerError::BadRequest(
        "Form too large".into(),
    ));
    assert_eq!(resp.status(), 400);
    let body = body_string(&mut resp);
    assert!(body.contains("Error 400"));
    assert!(body.contains("Form too large"));
}

#[test]
fn stylesheet_is_served() {
    let app = seeded_app();
    let mut resp = handle(get("/static/main.css"), &app).unwrap();
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        "text/css; charset=utf-8"
    );
    assert!(body_string(&mut resp).contains(".listing-card"));
}
