use crate::domain::listing::Listing;

#[allow(clippy::too_many_arguments)]
fn demo(
    id: &str,
    restaurant_name: &str,
    food_type: &str,
    description: &str,
    quantity: &str,
    pickup_time: &str,
    address: &str,
    distance: &str,
) -> Listing {
    Listing {
        id: id.to_string(),
        restaurant_name: restaurant_name.to_string(),
        food_type: food_type.to_string(),
        description: description.to_string(),
        quantity: quantity.to_string(),
        pickup_time: pickup_time.to_string(),
        address: address.to_string(),
        image_url: Some(format!("https://picsum.photos/400/300?random={id}")),
        distance: Some(distance.to_string()),
    }
}

/// Listings the app starts with, in display order.
pub fn demo_listings() -> Vec<Listing> {
    vec![
        demo(
            "1",
            "Green Leaf Cafe",
            "Salads and Sandwiches",
            "Freshly made salads and assorted sandwiches from today.",
            "Approx. 10-12 meals",
            "18:00 - 19:00",
            "123 Main St, Anytown",
            "0.5 miles",
        ),
        demo(
            "2",
            "The Daily Bread Bakery",
            "Assorted Breads and Pastries",
            "Sourdough, croissants, muffins. Baked fresh this morning.",
            "2 large boxes",
            "16:30 - 17:30",
            "456 Oak Ave, Anytown",
            "1.2 miles",
        ),
        demo(
            "3",
            "Pizza Palace",
            "Pepperoni and Veggie Pizzas",
            "Unsold pizzas from the lunch rush, still warm!",
            "5 large pizzas",
            "19:00 - 20:00 Suggested by AI",
            "789 Pine Rd, Anytown",
            "2.5 miles",
        ),
        demo(
            "4",
            "Mama Mia Pasta",
            "Pasta Dishes",
            "Generous portions of lasagna and spaghetti bolognese.",
            "Approx. 8-10 portions",
            "20:00 - 20:30",
            "101 Pasta Ln, Anytown",
            "0.8 miles",
        ),
        demo(
            "5",
            "Sushi Central",
            "Sushi Rolls and Nigiri",
            "Variety of sushi rolls and nigiri, made today.",
            "About 30-40 pieces",
            "21:00 - 21:30",
            "222 Fish St, Anytown",
            "3.1 miles",
        ),
    ]
}
