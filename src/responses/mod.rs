pub mod assets;
pub mod errors;
pub mod html;

pub use crate::errors::ResultResp;
pub use assets::css_response;
pub use errors::html_error_response;
pub use html::{html_fragment_with_etag, html_response, html_response_with_status, not_modified};
