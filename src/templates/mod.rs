pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{listing_card, listing_summary};
pub use layouts::desktop::desktop_layout;
