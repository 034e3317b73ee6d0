use std::{path::PathBuf, str::FromStr};

use cookbook_recipe::CreateInput;
use cookbook_user::RegisterInput;
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<cookbook_shared::State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    cookbook_db::migrator::<sqlx::Sqlite>()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(cookbook_shared::State::single(pool))
}

#[allow(dead_code)]
pub async fn create_user(
    state: &cookbook_shared::State,
    name: impl Into<String>,
) -> anyhow::Result<i64> {
    let name = name.into();
    let command = cookbook_user::Command::new(state.clone());

    Ok(command
        .register(RegisterInput {
            email: Some(format!("{name}@cookbook.localhost")),
            username: name,
            password: "my_password".to_owned(),
        })
        .await?)
}

#[allow(dead_code)]
pub fn recipe_input(name: &str, ingredients: &str, tags: &str) -> CreateInput {
    CreateInput {
        name: name.to_owned(),
        instructions: "Mix and cook.".to_owned(),
        prep_time: "30 minutes".to_owned(),
        cuisine: "Italian".to_owned(),
        ingredients: ingredients.to_owned(),
        tags: tags.to_owned(),
    }
}

#[allow(dead_code)]
pub async fn count(state: &cookbook_shared::State, table: &str) -> anyhow::Result<i64> {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&state.read_db)
        .await?;

    Ok(count)
}
