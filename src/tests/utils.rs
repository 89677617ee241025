use crate::app::App;
use crate::store::seed::demo_listings;
use crate::store::ListingStore;
use crate::suggestions::{
    DescriptionRequest, DescriptionSuggestion, PickupTimeRequest, PickupTimeSuggestion,
    SuggestionError, SuggestionService,
};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory stand-in for the Gemini client.
pub struct FakeSuggestions {
    description: Option<DescriptionSuggestion>,
    pickup: Option<PickupTimeSuggestion>,
    calls: Arc<AtomicUsize>,
}

impl FakeSuggestions {
    pub fn failing() -> Self {
        Self {
            description: None,
            pickup: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn answering(description: &str, pickup_time: &str, reasoning: &str) -> Self {
        Self {
            description: Some(DescriptionSuggestion {
                suggested_description: description.to_string(),
            }),
            pickup: Some(PickupTimeSuggestion {
                suggested_pickup_time: pickup_time.to_string(),
                reasoning: reasoning.to_string(),
            }),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl SuggestionService for FakeSuggestions {
    fn suggest_description(
        &self,
        _req: &DescriptionRequest,
    ) -> Result<DescriptionSuggestion, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.description.clone().ok_or(SuggestionError::Api {
            status: 503,
            body: "overloaded".into(),
        })
    }

    fn suggest_pickup_time(
        &self,
        _req: &PickupTimeRequest,
    ) -> Result<PickupTimeSuggestion, SuggestionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pickup
            .clone()
            .ok_or_else(|| SuggestionError::Request("connection refused".into()))
    }
}

/// App seeded with the five demo listings and failing suggestions.
pub fn seeded_app() -> App {
    App::new(
        ListingStore::with_listings(demo_listings()),
        Box::new(FakeSuggestions::failing()),
    )
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// POST with an `application/x-www-form-urlencoded` body built from `pairs`.
pub fn post_form(uri: &str, pairs: &[(&str, &str)]) -> Request {
    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish();

    http::Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub fn body_string(resp: &mut Response) -> String {
    let mut body = String::new();
    resp.body_mut().reader().read_to_string(&mut body).unwrap();
    body
}
