use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use maud::Markup;

pub fn html_response(markup: Markup) -> ResultResp {
    html_response_with_status(200, markup)
}

pub fn html_response_with_status(status: u16, markup: Markup) -> ResultResp {
    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

/// HTML fragment tagged with an `ETag` so htmx polling can revalidate.
pub fn html_fragment_with_etag(markup: Markup, etag: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_HTML_UTF_8.as_ref())
        .header("ETag", etag)
        .header("Cache-Control", "no-cache")
        .body(Body::from(markup.into_string()))
        .map_err(|_| ServerError::InternalError)
}

pub fn not_modified(etag: &str) -> ResultResp {
    ResponseBuilder::new()
        .status(304)
        .header("ETag", etag)
        .body(Body::empty())
        .map_err(|_| ServerError::InternalError)
}
