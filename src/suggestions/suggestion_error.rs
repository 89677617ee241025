use thiserror::Error;

/// Anything that keeps a suggestion from reaching the form. The form shows
/// every variant the same way: the user is asked to type the value instead.
#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error("suggestion service is not configured")]
    NotConfigured,
    #[error("request failed: {0}")]
    Request(String),
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },
    #[error("unexpected response: {0}")]
    Parse(String),
}
