use crate::app::App;
use crate::domain::food_type::DonationSize;
use crate::domain::{ClaimForm, FieldErrors, ListingFilter, ListingForm};
use crate::errors::ServerError;
use crate::responses::{
    css_response, html_fragment_with_etag, html_response, html_response_with_status,
    not_modified, ResultResp,
};
use crate::store::StoreError;
use crate::suggestions::{DescriptionRequest, PickupTimeRequest};
use crate::templates::pages::{self, create_listing, CreateListingVm};
use astra::Request;
use std::collections::HashMap;
use std::io::Read;
use url::form_urlencoded;

const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(mut req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(pages::home_page()),

        ("GET", "/browse") => browse(&req, app),
        ("GET", "/browse/results") => browse_results(&req, app),

        ("GET", "/create-listing") => html_response(pages::create_listing_page(&CreateListingVm {
            form: &ListingForm::default(),
            errors: &FieldErrors::new(),
            created: None,
        })),
        ("POST", "/create-listing") => submit_listing(&mut req, app),
        ("POST", "/create-listing/suggest-description") => suggest_description(&mut req, app),
        ("POST", "/create-listing/suggest-pickup-time") => suggest_pickup_time(&mut req, app),

        ("GET", "/static/main.css") => css_response(),

        (method, path) => match claim_listing_id(path) {
            Some(id) => match method {
                "GET" => claim_form(id, app),
                "POST" => submit_claim(&mut req, id, app),
                _ => Err(ServerError::MethodNotAllowed),
            },
            None => Err(ServerError::NotFound),
        },
    }
}

/// `/listings/{id}/claim` -> `{id}`
fn claim_listing_id(path: &str) -> Option<&str> {
    let id = path.strip_prefix("/listings/")?.strip_suffix("/claim")?;
    if id.is_empty() || id.contains('/') {
        None
    } else {
        Some(id)
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_form(req: &mut Request) -> Result<HashMap<String, String>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Could not read form: {e}")))?;

    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("Form too large".into()));
    }

    Ok(form_urlencoded::parse(&body).into_owned().collect())
}

fn field<'a>(fields: &'a HashMap<String, String>, name: &str) -> &'a str {
    fields.get(name).map(String::as_str).unwrap_or_default()
}

fn filter_from_query(req: &Request) -> ListingFilter {
    let params = parse_query(req);
    ListingFilter::new(field(&params, "q"), field(&params, "food_type"))
}

fn browse(req: &Request, app: &App) -> ResultResp {
    let filter = filter_from_query(req);
    let revision = app.revision();
    let listings = app.store.get_listings();
    html_response(pages::browse_page(&listings, &filter, revision))
}

fn browse_results(req: &Request, app: &App) -> ResultResp {
    let etag = app.etag();
    let unchanged = req
        .headers()
        .get("If-None-Match")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == etag);
    if unchanged {
        return not_modified(&etag);
    }

    let filter = filter_from_query(req);
    let revision = app.revision();
    let listings = app.store.get_listings();
    let visible = filter.apply(&listings);
    html_fragment_with_etag(pages::browse_results(&visible, &filter, revision), &etag)
}

fn submit_listing(req: &mut Request, app: &App) -> ResultResp {
    let form = ListingForm::from_fields(&read_form(req)?);

    let errors = match form.validate() {
        Ok(payload) => match app.store.add_listing(payload) {
            Ok(listing) => {
                tracing::info!(id = %listing.id, restaurant = %listing.restaurant_name, "listing created");
                return html_response(pages::create_listing_page(&CreateListingVm {
                    form: &ListingForm::default(),
                    errors: &FieldErrors::new(),
                    created: Some(&listing),
                }));
            }
            Err(StoreError::InvalidInput(msg)) => {
                let mut errors = FieldErrors::new();
                errors.add("restaurant_name", msg);
                errors
            }
        },
        Err(errors) => errors,
    };

    tracing::debug!(fields = errors.len(), "create listing rejected");
    html_response_with_status(
        400,
        pages::create_listing_page(&CreateListingVm {
            form: &form,
            errors: &errors,
            created: None,
        }),
    )
}

fn suggest_description(req: &mut Request, app: &App) -> ResultResp {
    let fields = read_form(req)?;
    let food_type = field(&fields, "food_type");
    let quantity = field(&fields, "quantity");

    if food_type.is_empty() || quantity.is_empty() {
        return html_response(create_listing::missing_information(
            "Please fill in Food Type and Quantity to get a description suggestion.",
        ));
    }

    let request = DescriptionRequest {
        food_type: food_type.to_string(),
        quantity: quantity.to_string(),
    };
    match app.suggestions().suggest_description(&request) {
        Ok(suggestion) => html_response(create_listing::description_suggestion(&suggestion)),
        Err(e) => {
            tracing::warn!(error = %e, "description suggestion unavailable");
            html_response(create_listing::suggestion_unavailable(
                "Error Suggesting Description",
            ))
        }
    }
}

fn suggest_pickup_time(req: &mut Request, app: &App) -> ResultResp {
    let fields = read_form(req)?;
    let closing_time = field(&fields, "closing_time");
    let food_type = field(&fields, "food_type");

    let donation_size = match field(&fields, "donation_size").parse::<DonationSize>() {
        Ok(size) if !closing_time.is_empty() && !food_type.is_empty() => size,
        _ => {
            return html_response(create_listing::missing_information(
                "Please fill in Closing Time, Donation Size, and Food Type to get a time suggestion.",
            ))
        }
    };

    let request = PickupTimeRequest {
        closing_time: closing_time.to_string(),
        donation_size,
        food_type: food_type.to_string(),
    };
    match app.suggestions().suggest_pickup_time(&request) {
        Ok(suggestion) => html_response(create_listing::pickup_suggestion(&suggestion)),
        Err(e) => {
            tracing::warn!(error = %e, "pickup time suggestion unavailable");
            html_response(create_listing::suggestion_unavailable("Error Suggesting Time"))
        }
    }
}

fn claim_form(id: &str, app: &App) -> ResultResp {
    let listing = app.store.find_listing(id).ok_or(ServerError::NotFound)?;
    html_response(pages::claim_page(
        &listing,
        &ClaimForm::default(),
        &FieldErrors::new(),
    ))
}

fn submit_claim(req: &mut Request, id: &str, app: &App) -> ResultResp {
    let listing = app.store.find_listing(id).ok_or(ServerError::NotFound)?;
    let form = ClaimForm::from_fields(&read_form(req)?);

    match form.validate(&listing.id, &listing.restaurant_name) {
        Ok(claim) => {
            // Nothing is persisted; contact details stay out of the logs.
            tracing::info!(
                listing_id = %claim.listing_id,
                claimant_type = %claim.claimant_type,
                "claim received"
            );
            html_response(pages::claim_confirmation_page(
                &claim.listing_restaurant_name,
            ))
        }
        Err(errors) => html_response_with_status(400, pages::claim_page(&listing, &form, &errors)),
    }
}
