//! Development catalog created on an empty database.

use rand::{
    Rng,
    seq::{IndexedRandom, SliceRandom},
};

use crate::{Command, CreateInput, Query};

pub const RECIPE_NAMES: [&str; 50] = [
    "Spaghetti Carbonara",
    "Chicken Tikka Masala",
    "Beef Tacos",
    "Vegetable Stir Fry",
    "Margherita Pizza",
    "Caesar Salad",
    "French Onion Soup",
    "Pad Thai",
    "Chicken Curry",
    "Beef Stroganoff",
    "Mushroom Risotto",
    "Greek Salad",
    "Lentil Soup",
    "Fish and Chips",
    "Shrimp Scampi",
    "Chili Con Carne",
    "Ratatouille",
    "Falafel Wrap",
    "Pancakes",
    "Banana Bread",
    "Carrot Cake",
    "Chocolate Cake",
    "Apple Pie",
    "Lemon Tart",
    "Tiramisu",
    "Guacamole",
    "Hummus",
    "Minestrone",
    "Paella",
    "Sushi Rolls",
    "Ramen",
    "Pho",
    "Butter Chicken",
    "Lasagna",
    "Shepherd's Pie",
    "Quiche Lorraine",
    "Eggplant Parmesan",
    "Stuffed Peppers",
    "Tomato Bruschetta",
    "Gazpacho",
    "Beef Wellington",
    "Roast Chicken",
    "Pulled Pork",
    "Clam Chowder",
    "Fried Rice",
    "Miso Soup",
    "Moussaka",
    "Couscous Salad",
    "Blueberry Muffins",
    "Cheesecake",
];

pub const CUISINES: [&str; 8] = [
    "Italian", "Mexican", "Indian", "Chinese", "French", "Thai", "Greek", "American",
];

pub const TAGS: [&str; 8] = [
    "Vegan",
    "Vegetarian",
    "Quick",
    "Dessert",
    "Spicy",
    "Healthy",
    "Comfort",
    "Gluten-Free",
];

/// Ingredient names are single words so they survive the `amount name` form parsing.
pub const INGREDIENTS: [(&str, &str); 16] = [
    ("2 cups", "flour"),
    ("1 cup", "sugar"),
    ("3", "eggs"),
    ("100 g", "butter"),
    ("1 cup", "milk"),
    ("1 tsp", "salt"),
    ("1/2 tsp", "pepper"),
    ("2 cloves", "garlic"),
    ("1", "onion"),
    ("4", "tomatoes"),
    ("1 cup", "rice"),
    ("500 g", "chicken"),
    ("2", "carrots"),
    ("200 g", "cheese"),
    ("1 bunch", "basil"),
    ("2 tbsp", "honey"),
];

#[derive(Debug, Clone)]
pub struct SeedUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Insert the fixed catalog when no recipe exists yet and return how many recipes were created.
pub async fn seed<R: Rng>(
    state: &cookbook_shared::State,
    rng: &mut R,
    user: &SeedUser,
) -> cookbook_shared::Result<usize> {
    let query = Query(state.clone());

    if query.count().await? > 0 {
        tracing::info!("recipes already present, skipping seed");
        return Ok(0);
    }

    let users = cookbook_user::Command::new(state.clone());
    let user_id = match users.find_by_username(&user.username).await? {
        Some(found) => found.id,
        None => {
            users
                .register(cookbook_user::RegisterInput {
                    username: user.username.to_owned(),
                    email: Some(user.email.to_owned()),
                    password: user.password.to_owned(),
                })
                .await?
        }
    };

    let command = Command::new(state.clone());

    for name in RECIPE_NAMES {
        command.create(user_id, random_recipe(rng, name)).await?;
    }

    tracing::info!(user_id, total = RECIPE_NAMES.len(), "seeded recipes");

    Ok(RECIPE_NAMES.len())
}

fn random_recipe<R: Rng>(rng: &mut R, name: &str) -> CreateInput {
    let cuisine = CUISINES.choose(rng).copied().unwrap_or(CUISINES[0]);

    let count = rng.random_range(3..=6);
    let mut ingredients = INGREDIENTS.to_vec();
    ingredients.shuffle(rng);
    let ingredients = ingredients
        .iter()
        .take(count)
        .map(|(amount, name)| format!("{amount} {name}"))
        .collect::<Vec<_>>()
        .join(",");

    let count = rng.random_range(1..=2);
    let tags = TAGS
        .choose_multiple(rng, count)
        .copied()
        .collect::<Vec<_>>()
        .join(",");

    CreateInput {
        name: name.to_owned(),
        instructions: format!("Prepare the {name} step by step and serve."),
        prep_time: format!("{} minutes", rng.random_range(10..=120)),
        cuisine: cuisine.to_owned(),
        ingredients,
        tags,
    }
}
