use crate::domain::listing::Listing;

pub const ALL_FOOD_TYPES: &str = "all";

/// Browse-page filter: free-text search plus a food type narrowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub search: String,
    pub food_type: String,
}

impl ListingFilter {
    pub fn new(search: impl Into<String>, food_type: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            food_type: food_type.into(),
        }
    }

    pub fn is_active(&self) -> bool {
        !self.search.trim().is_empty() || !self.matches_all_types()
    }

    fn matches_all_types(&self) -> bool {
        self.food_type.is_empty() || self.food_type.eq_ignore_ascii_case(ALL_FOOD_TYPES)
    }

    pub fn matches(&self, listing: &Listing) -> bool {
        let search = self.search.to_lowercase();
        let search_hit = search.is_empty()
            || listing.restaurant_name.to_lowercase().contains(&search)
            || listing.food_type.to_lowercase().contains(&search)
            || listing.description.to_lowercase().contains(&search);

        let type_hit = self.matches_all_types()
            || listing
                .food_type
                .to_lowercase()
                .contains(&self.food_type.to_lowercase());

        search_hit && type_hit
    }

    pub fn apply<'a>(&self, listings: &'a [Listing]) -> Vec<&'a Listing> {
        listings.iter().filter(|l| self.matches(l)).collect()
    }
}

/// Options for the food type dropdown: `all`, then the first word of each
/// listing's food type (punctuation stripped), deduplicated in first-seen order.
pub fn food_type_options(listings: &[Listing]) -> Vec<String> {
    let mut options = vec![ALL_FOOD_TYPES.to_string()];

    for listing in listings {
        let first_word: String = listing
            .food_type
            .split(' ')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| !matches!(c, '(' | ')' | ','))
            .collect();
        let first_word = first_word.trim();

        let option = if first_word.is_empty() {
            listing.food_type.clone()
        } else {
            first_word.to_string()
        };

        if !option.is_empty() && !options.contains(&option) {
            options.push(option);
        }
    }

    options
}
