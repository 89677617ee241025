pub mod browse;
pub mod claim;
pub mod create_listing;
pub mod home;

pub use browse::{browse_page, browse_results};
pub use claim::{claim_confirmation_page, claim_page};
pub use create_listing::{create_listing_page, CreateListingVm};
pub use home::home_page;
