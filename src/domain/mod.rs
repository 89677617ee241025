pub mod claim;
pub mod filter;
pub mod food_type;
pub mod listing;
pub mod listing_form;
pub mod validation;

pub use claim::ClaimForm;
pub use filter::ListingFilter;
pub use listing::Listing;
pub use listing_form::ListingForm;
pub use validation::FieldErrors;
