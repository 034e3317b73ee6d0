mod comment;
mod ingredient;
mod recipe;
mod recipe_tag;
mod tag;
mod user;

use sea_query::SqliteQueryBuilder;
use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "cookbook",
    "m0001",
    vec_box![],
    vec_box![
        user::CreateTable,
        user::CreateUk1,
        user::CreateUk2,
        recipe::CreateTable,
        recipe::CreateIdx1,
        ingredient::CreateTable,
        ingredient::CreateIdx1,
        tag::CreateTable,
        tag::CreateUk1,
        recipe_tag::CreateTable,
        recipe_tag::CreateIdx1,
        comment::CreateTable,
        comment::CreateIdx1,
        comment::CreateIdx2
    ]
);

async fn execute(
    connection: &mut sqlx::SqliteConnection,
    statement: impl sea_query::SchemaStatementBuilder,
) -> Result<(), sqlx_migrator::Error> {
    let statement = statement.to_string(SqliteQueryBuilder);
    sqlx::query(&statement).execute(connection).await?;

    Ok(())
}
