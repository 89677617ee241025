use crate::domain::validation::{is_phone_number, FieldErrors};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimantType {
    Individual,
    Organisation,
}

impl ClaimantType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimantType::Individual => "individual",
            ClaimantType::Organisation => "organisation",
        }
    }
}

impl fmt::Display for ClaimantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimantType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "individual" => Ok(ClaimantType::Individual),
            "organisation" => Ok(ClaimantType::Organisation),
            _ => Err(()),
        }
    }
}

/// A request to collect a listing. Never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    pub listing_id: String,
    pub listing_restaurant_name: String,
    pub name: String,
    pub location: String,
    pub phone_number: String,
    pub claimant_type: ClaimantType,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimForm {
    pub name: String,
    pub location: String,
    pub phone_number: String,
    pub claimant_type: String,
}

impl ClaimForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let get = |key: &str| fields.get(key).cloned().unwrap_or_default();
        Self {
            name: get("name"),
            location: get("location"),
            phone_number: get("phone_number"),
            claimant_type: get("claimant_type"),
        }
    }

    pub fn validate(
        &self,
        listing_id: &str,
        listing_restaurant_name: &str,
    ) -> Result<Claim, FieldErrors> {
        let mut errors = FieldErrors::new();

        errors.min_chars("name", &self.name, 2, "Name must be at least 2 characters.");
        errors.min_chars(
            "location",
            &self.location,
            5,
            "Location/Address must be at least 5 characters.",
        );
        if !is_phone_number(&self.phone_number) {
            errors.add(
                "phone_number",
                "Please enter a valid phone number (e.g., +1XXXXXXXXXX or XXXXXXXXXX).",
            );
        }
        let claimant_type = match self.claimant_type.parse::<ClaimantType>() {
            Ok(kind) => kind,
            Err(_) => {
                errors.add(
                    "claimant_type",
                    "Please select if you are an individual or an organisation.",
                );
                return Err(errors);
            }
        };

        errors.into_result()?;

        Ok(Claim {
            listing_id: listing_id.to_string(),
            listing_restaurant_name: listing_restaurant_name.to_string(),
            name: self.name.clone(),
            location: self.location.clone(),
            phone_number: self.phone_number.clone(),
            claimant_type,
        })
    }
}
