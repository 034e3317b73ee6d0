use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

use crate::table::{Ingredient, Recipe};

pub struct CreateTable;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Table::create()
            .table(Ingredient::Table)
            .col(
                ColumnDef::new(Ingredient::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Ingredient::RecipeId).integer().not_null())
            .col(
                ColumnDef::new(Ingredient::Amount)
                    .string()
                    .not_null()
                    .default(""),
            )
            .col(ColumnDef::new(Ingredient::Name).string().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_ingredient_recipe")
                    .from(Ingredient::Table, Ingredient::RecipeId)
                    .to(Recipe::Table, Recipe::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        super::execute(connection, Table::drop().table(Ingredient::Table).to_owned()).await
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
            .name("idx_ingredient_recipe_id")
            .table(Ingredient::Table)
            .col(Ingredient::RecipeId)
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::drop()
            .name("idx_ingredient_recipe_id")
            .table(Ingredient::Table)
            .to_owned();

        super::execute(connection, statement).await
    }
}
