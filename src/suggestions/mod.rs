mod client;
mod models;
mod prompts;
mod suggestion_error;

pub use client::{GeminiClient, GeminiConfig};
pub use models::{DescriptionRequest, DescriptionSuggestion, PickupTimeRequest, PickupTimeSuggestion};
pub use suggestion_error::SuggestionError;

/// Text-generation backend for the create-listing form. One request, one
/// response; no retries or caching.
pub trait SuggestionService: Send + Sync {
    fn suggest_description(
        &self,
        req: &DescriptionRequest,
    ) -> Result<DescriptionSuggestion, SuggestionError>;

    fn suggest_pickup_time(
        &self,
        req: &PickupTimeRequest,
    ) -> Result<PickupTimeSuggestion, SuggestionError>;
}
