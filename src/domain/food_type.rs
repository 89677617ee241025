use std::fmt;
use std::str::FromStr;

/// Categories offered by the create-listing form.
pub const FOOD_TYPE_OPTIONS: &[&str] = &[
    "Bakery (Bread, Pastries, Cakes)",
    "Italian (Pizza, Pasta)",
    "Asian (Sushi, Noodles, Rice dishes)",
    "Sandwiches & Salads",
    "Mexican (Tacos, Burritos)",
    "Indian (Curries, Biryani)",
    "Fast Food (Burgers, Fries)",
    "Beverages",
    "Groceries (Canned goods, Produce)",
    "Desserts",
    "Other",
];

pub fn is_food_type_option(value: &str) -> bool {
    FOOD_TYPE_OPTIONS.contains(&value)
}

/// Rough size of a donation. Only feeds the pickup-time suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonationSize {
    Small,
    Medium,
    Large,
}

impl DonationSize {
    pub const ALL: [DonationSize; 3] = [DonationSize::Small, DonationSize::Medium, DonationSize::Large];

    pub fn as_str(&self) -> &'static str {
        match self {
            DonationSize::Small => "small",
            DonationSize::Medium => "medium",
            DonationSize::Large => "large",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DonationSize::Small => "Small (1-5 servings)",
            DonationSize::Medium => "Medium (6-15 servings)",
            DonationSize::Large => "Large (15+ servings)",
        }
    }
}

impl fmt::Display for DonationSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationSize {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(DonationSize::Small),
            "medium" => Ok(DonationSize::Medium),
            "large" => Ok(DonationSize::Large),
            _ => Err(()),
        }
    }
}
