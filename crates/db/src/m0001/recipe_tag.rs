use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

use crate::table::{Recipe, RecipeTag, Tag};

pub struct CreateTable;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Table::create()
            .table(RecipeTag::Table)
            .col(ColumnDef::new(RecipeTag::RecipeId).integer().not_null())
            .col(ColumnDef::new(RecipeTag::TagId).integer().not_null())
            .primary_key(
                Index::create()
                    .col(RecipeTag::RecipeId)
                    .col(RecipeTag::TagId),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_recipe_tag_recipe")
                    .from(RecipeTag::Table, RecipeTag::RecipeId)
                    .to(Recipe::Table, Recipe::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_recipe_tag_tag")
                    .from(RecipeTag::Table, RecipeTag::TagId)
                    .to(Tag::Table, Tag::Id)
                    .on_delete(ForeignKeyAction::Restrict),
            )
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        super::execute(connection, Table::drop().table(RecipeTag::Table).to_owned()).await
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
            .name("idx_recipe_tag_tag_id")
            .table(RecipeTag::Table)
            .col(RecipeTag::TagId)
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::drop()
            .name("idx_recipe_tag_tag_id")
            .table(RecipeTag::Table)
            .to_owned();

        super::execute(connection, statement).await
    }
}
