use cookbook_recipe::query::{HOME_LIMIT, RecipesQuery};
use temp_dir::TempDir;

mod helpers;

async fn setup() -> anyhow::Result<(TempDir, cookbook_recipe::Query)> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user_id = helpers::create_user(&state, "john").await?;
    let command = cookbook_recipe::Command::new(state.clone());

    for (name, tags) in [
        ("Carrot Cake", "Dessert"),
        ("Chocolate Cake", "Dessert, Sweet"),
        ("Apple Pie", "Dessert"),
        ("Tomato Soup", "Vegan"),
        ("Green Curry", "Spicy, Vegan"),
        ("Fish Tacos", "Quick"),
        ("100% Rye Bread", "Baking"),
        ("Pad_Thai", "Spicy"),
    ] {
        command
            .create(user_id, helpers::recipe_input(name, "1 cup flour", tags))
            .await?;
    }

    Ok((dir, cookbook_recipe::Query(state)))
}

fn names(recipes: &[cookbook_recipe::query::RecipeListItem]) -> Vec<&str> {
    recipes.iter().map(|r| r.name.as_str()).collect()
}

#[tokio::test]
async fn test_filter_by_name() -> anyhow::Result<()> {
    let (_dir, query) = setup().await?;

    let recipes = query
        .filter(RecipesQuery {
            q: Some("cake".to_owned()),
            ..Default::default()
        })
        .await?;

    assert_eq!(names(&recipes), vec!["Carrot Cake", "Chocolate Cake"]);
    assert_eq!(recipes[0].author, "john");

    let recipes = query
        .filter(RecipesQuery {
            q: Some("CAKE".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(recipes.len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_filter_escapes_wildcards() -> anyhow::Result<()> {
    let (_dir, query) = setup().await?;

    let recipes = query
        .filter(RecipesQuery {
            q: Some("%".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&recipes), vec!["100% Rye Bread"]);

    let recipes = query
        .filter(RecipesQuery {
            q: Some("_".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&recipes), vec!["Pad_Thai"]);

    Ok(())
}

#[tokio::test]
async fn test_filter_by_tag_and_name() -> anyhow::Result<()> {
    let (_dir, query) = setup().await?;

    let recipes = query
        .filter(RecipesQuery {
            tag: Some("ssert".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(
        names(&recipes),
        vec!["Carrot Cake", "Chocolate Cake", "Apple Pie"]
    );
    assert_eq!(
        recipes[1].tags,
        vec!["Dessert".to_owned(), "Sweet".to_owned()]
    );

    let recipes = query
        .filter(RecipesQuery {
            q: Some("cake".to_owned()),
            tag: Some("sweet".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&recipes), vec!["Chocolate Cake"]);

    let recipes = query
        .filter(RecipesQuery {
            tag: Some("Unknown".to_owned()),
            ..Default::default()
        })
        .await?;
    assert!(recipes.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_filter_blank_and_limit() -> anyhow::Result<()> {
    let (_dir, query) = setup().await?;

    let all = query
        .filter(RecipesQuery {
            q: Some("  ".to_owned()),
            tag: Some("".to_owned()),
            limit: None,
        })
        .await?;
    assert_eq!(all.len(), 8);

    let home = query
        .filter(RecipesQuery {
            limit: Some(HOME_LIMIT),
            ..Default::default()
        })
        .await?;
    assert_eq!(home.len(), 6);
    assert_eq!(names(&home)[0], "Carrot Cake");
    assert_eq!(query.count().await?, 8);

    Ok(())
}

#[tokio::test]
async fn test_filter_folds_non_ascii_case() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let state = helpers::setup_test_state(dir.child("db.sqlite3")).await?;
    let user_id = helpers::create_user(&state, "john").await?;
    let command = cookbook_recipe::Command::new(state.clone());
    command
        .create(user_id, helpers::recipe_input("Żurek", "1 łyżka mąki", "Śniadanie"))
        .await?;
    command
        .create(user_id, helpers::recipe_input("Crème Brûlée", "4 jaunes", "Dessert"))
        .await?;
    let query = cookbook_recipe::Query(state);

    for q in ["żurek", "ŻUREK", "Żurek"] {
        let recipes = query
            .filter(RecipesQuery {
                q: Some(q.to_owned()),
                ..Default::default()
            })
            .await?;
        assert_eq!(names(&recipes), vec!["Żurek"], "{q}");
    }

    let recipes = query
        .filter(RecipesQuery {
            q: Some("CRÈME".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&recipes), vec!["Crème Brûlée"]);

    let recipes = query
        .filter(RecipesQuery {
            tag: Some("śniadanie".to_owned()),
            ..Default::default()
        })
        .await?;
    assert_eq!(names(&recipes), vec!["Żurek"]);
    assert_eq!(recipes[0].tags, vec!["Śniadanie".to_owned()]);

    Ok(())
}
