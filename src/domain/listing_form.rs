use crate::domain::food_type::{is_food_type_option, DonationSize};
use crate::domain::listing::NewListing;
use crate::domain::validation::{is_clock_time, FieldErrors};
use std::collections::HashMap;

pub const DEFAULT_CLOSING_TIME: &str = "22:00";

/// Raw values of the create-listing form, kept as typed so the form can be
/// re-rendered after a failed submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingForm {
    pub restaurant_name: String,
    pub food_type: String,
    pub description: String,
    pub quantity: String,
    pub donation_size: String,
    pub closing_time: String,
    pub pickup_window_start: String,
    pub pickup_window_end: String,
    pub address: String,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            restaurant_name: String::new(),
            food_type: String::new(),
            description: String::new(),
            quantity: String::new(),
            donation_size: String::new(),
            closing_time: DEFAULT_CLOSING_TIME.to_string(),
            pickup_window_start: String::new(),
            pickup_window_end: String::new(),
            address: String::new(),
        }
    }
}

impl ListingForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            restaurant_name: get("restaurant_name"),
            food_type: get("food_type"),
            description: get("description"),
            quantity: get("quantity"),
            donation_size: get("donation_size"),
            closing_time: get("closing_time"),
            pickup_window_start: get("pickup_window_start"),
            pickup_window_end: get("pickup_window_end"),
            address: get("address"),
        }
    }

    pub fn validate(&self) -> Result<NewListing, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.min_chars(
            "restaurant_name",
            &self.restaurant_name,
            2,
            "Restaurant name must be at least 2 characters.",
        );
        if !is_food_type_option(&self.food_type) {
            errors.add("food_type", "Please select a food type.");
        }

        let description_len = self.description.chars().count();
        if description_len < 10 {
            errors.add("description", "Description must be at least 10 characters.");
        } else if description_len > 300 {
            errors.add("description", "Description must be at most 300 characters.");
        }

        if self.quantity.is_empty() {
            errors.add("quantity", "Quantity is required.");
        }
        if self.donation_size.parse::<DonationSize>().is_err() {
            errors.add("donation_size", "Please select donation size.");
        }

        for (field, value) in [
            ("closing_time", &self.closing_time),
            ("pickup_window_start", &self.pickup_window_start),
            ("pickup_window_end", &self.pickup_window_end),
        ] {
            if !is_clock_time(value) {
                errors.add(field, "Invalid time format (HH:MM).");
            }
        }

        // Zero-padded HH:MM compares correctly as text.
        if !self.pickup_window_start.is_empty()
            && !self.pickup_window_end.is_empty()
            && self.pickup_window_start >= self.pickup_window_end
        {
            errors.add(
                "pickup_window_end",
                "Pickup start time must be before end time.",
            );
        }

        errors.min_chars(
            "address",
            &self.address,
            5,
            "Address must be at least 5 characters.",
        );

        errors.into_result()?;

        Ok(NewListing {
            restaurant_name: self.restaurant_name.clone(),
            food_type: self.food_type.clone(),
            description: self.description.clone(),
            quantity: self.quantity.clone(),
            pickup_window_start: self.pickup_window_start.clone(),
            pickup_window_end: self.pickup_window_end.clone(),
            address: self.address.clone(),
        })
    }
}
