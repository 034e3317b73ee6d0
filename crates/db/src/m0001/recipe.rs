use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

use crate::table::{Recipe, User};

pub struct CreateTable;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Table::create()
            .table(Recipe::Table)
            .col(
                ColumnDef::new(Recipe::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Recipe::UserId).integer().not_null())
            .col(
                ColumnDef::new(Recipe::Name)
                    .string()
                    .not_null()
                    .string_len(150),
            )
            .col(
                ColumnDef::new(Recipe::NameLower)
                    .string()
                    .not_null()
                    .string_len(150),
            )
            .col(ColumnDef::new(Recipe::Instructions).text().not_null())
            .col(
                ColumnDef::new(Recipe::PrepTime)
                    .string()
                    .not_null()
                    .string_len(50),
            )
            .col(
                ColumnDef::new(Recipe::Cuisine)
                    .string()
                    .not_null()
                    .string_len(50),
            )
            .col(ColumnDef::new(Recipe::CreatedAt).big_integer().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_recipe_user")
                    .from(Recipe::Table, Recipe::UserId)
                    .to(User::Table, User::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        super::execute(connection, Table::drop().table(Recipe::Table).to_owned()).await
    }
}

pub struct CreateIdx1;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::create()
            .name("idx_recipe_user_id")
            .table(Recipe::Table)
            .col(Recipe::UserId)
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::drop()
            .name("idx_recipe_user_id")
            .table(Recipe::Table)
            .to_owned();

        super::execute(connection, statement).await
    }
}
