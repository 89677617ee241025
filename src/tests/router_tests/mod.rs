mod browse_tests;
mod create_listing_tests;
mod page_tests;
mod suggestion_tests;
