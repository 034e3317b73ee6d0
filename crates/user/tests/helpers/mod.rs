use std::{path::PathBuf, str::FromStr};

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
    cmd: &cookbook_user::Command,
    name: impl Into<String>,
) -> anyhow::Result<i64> {
    let name = name.into();

    Ok(cmd
        .register(RegisterInput {
            email: Some(format!("{name}@cookbook.localhost")),
            username: name,
            password: "my_password".to_owned(),
        })
        .await?)
}
