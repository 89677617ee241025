use serde::{Deserialize, Serialize};

/// A single offer of surplus food. Immutable once the store has created it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: String,
    pub restaurant_name: String,
    pub food_type: String,
    pub description: String,
    pub quantity: String, // e.g. "10 meals", "5 kg"
    pub pickup_time: String,
    pub address: String,

    // Cosmetic only
    pub image_url: Option<String>,
    pub distance: Option<String>,
}

/// Payload accepted by `ListingStore::add_listing`.
/// `id`, `pickup_time` and the cosmetic fields are derived by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub restaurant_name: String,
    pub food_type: String,
    pub description: String,
    pub quantity: String,
    pub pickup_window_start: String,
    pub pickup_window_end: String,
    pub address: String,
}

impl NewListing {
    /// Pickup window exactly as submitted, no reformatting.
    pub fn pickup_time(&self) -> String {
        format!("{} - {}", self.pickup_window_start, self.pickup_window_end)
    }
}
