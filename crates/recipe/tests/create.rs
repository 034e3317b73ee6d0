use cookbook_recipe::query::{IngredientView, RecipesQuery};
use cookbook_shared::Error;
use temp_dir::TempDir;

mod helpers;

#[tokio::test]
async fn test_create_parses_ingredients() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user_id = helpers::create_user(&state, "john").await?;
    let command = cookbook_recipe::Command::new(state.clone());
    let query = cookbook_recipe::Query(state.clone());

    let id = command
        .create(
            user_id,
            helpers::recipe_input("Pancakes", "1 cup flour,2 eggs", "Breakfast"),
        )
        .await?;

    let recipe = query.find(id).await?.unwrap();
    assert_eq!(recipe.name, "Pancakes");
    assert_eq!(recipe.author, "john");
    assert_eq!(recipe.user_id, user_id);
    assert_eq!(
        recipe.ingredients,
        vec![
            IngredientView {
                amount: "1 cup".to_owned(),
                name: "flour".to_owned(),
            },
            IngredientView {
                amount: "2".to_owned(),
                name: "eggs".to_owned(),
            },
        ]
    );
    assert_eq!(recipe.tags, vec!["Breakfast".to_owned()]);
    assert!(recipe.comments.is_empty());
    assert_eq!(recipe.average_rating(), None);

    Ok(())
}

#[tokio::test]
async fn test_create_requires_fields() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user_id = helpers::create_user(&state, "john").await?;
    let command = cookbook_recipe::Command::new(state.clone());

    let mut missing_name = helpers::recipe_input("  ", "1 cup flour", "");
    missing_name.cuisine = "French".to_owned();

    let mut missing_cuisine = helpers::recipe_input("Soup", "1 cup water", "");
    missing_cuisine.cuisine = "".to_owned();

    let mut missing_instructions = helpers::recipe_input("Soup", "1 cup water", "");
    missing_instructions.instructions = " ".to_owned();

    for input in [
        missing_name,
        missing_cuisine,
        missing_instructions,
        helpers::recipe_input("Soup", " , ", "Vegan"),
    ] {
        let err = command.create(user_id, input).await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(err.to_string(), "Please fill out all fields!");
    }

    assert_eq!(helpers::count(&state, "recipe").await?, 0);
    assert_eq!(helpers::count(&state, "tag").await?, 0);

    Ok(())
}

#[tokio::test]
async fn test_tags_are_shared() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user_id = helpers::create_user(&state, "john").await?;
    let command = cookbook_recipe::Command::new(state.clone());
    let query = cookbook_recipe::Query(state.clone());

    let first = command
        .create(
            user_id,
            helpers::recipe_input("Salad", "1 lettuce", "Vegan, Quick, Vegan"),
        )
        .await?;
    let second = command
        .create(user_id, helpers::recipe_input("Curry", "2 potatoes", " Vegan "))
        .await?;

    let (vegan,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tag WHERE name = 'Vegan'")
        .fetch_one(&state.read_db)
        .await?;
    assert_eq!(vegan, 1);
    assert_eq!(helpers::count(&state, "recipe_tag").await?, 3);

    let recipes = query
        .filter(RecipesQuery {
            tag: Some("vegan".to_owned()),
            ..Default::default()
        })
        .await?;
    let ids: Vec<i64> = recipes.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(
        recipes[0].tags,
        vec!["Quick".to_owned(), "Vegan".to_owned()]
    );

    Ok(())
}
