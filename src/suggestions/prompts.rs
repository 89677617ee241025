use crate::suggestions::models::{DescriptionRequest, PickupTimeRequest};

pub fn description_prompt(req: &DescriptionRequest) -> String {
    format!(
        r#"You write short, appealing descriptions for food that restaurants are giving away.
Using the food type and quantity below, write an enticing description of at most 2-3 sentences.
Mention freshness or notable qualities where it fits. Do not use words like "surplus" or "leftover"; describe the food on its own merits.

Food Type: {food_type}
Quantity: {quantity}

Reply with a JSON object containing a single "suggestedDescription" field.
For example, for food type "Pepperoni and Veggie Pizzas" and quantity "5 large pizzas" a good reply is:
{{"suggestedDescription": "Enjoy a variety of delicious pepperoni and veggie pizzas! Perfect for a group meal, these 5 large pizzas are ready for pickup."}}
"#,
        food_type = req.food_type,
        quantity = req.quantity,
    )
}

pub fn pickup_time_prompt(req: &PickupTimeRequest) -> String {
    format!(
        r#"You help restaurants choose when donated food should be collected.
Using the closing time and the size of the donation, suggest the best pickup time.
Keep waste as low as possible without getting in the way of the restaurant's service.

Closing Time: {closing_time}
Donation Size: {donation_size}
Food Type: {food_type}

Reply with a JSON object containing "suggestedPickupTime" and "reasoning" fields.
"suggestedPickupTime" must use HH:mm format.
"#,
        closing_time = req.closing_time,
        donation_size = req.donation_size,
        food_type = req.food_type,
    )
}
