use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, Table};

use crate::table::{Comment, Recipe, User};

pub struct CreateTable;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Table::create()
            .table(Comment::Table)
            .col(
                ColumnDef::new(Comment::Id)
                    .integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(Comment::RecipeId).integer().not_null())
            .col(ColumnDef::new(Comment::UserId).integer().not_null())
            .col(ColumnDef::new(Comment::Rating).integer().not_null())
            .col(ColumnDef::new(Comment::Text).text().not_null().default(""))
            .col(ColumnDef::new(Comment::CreatedAt).big_integer().not_null())
            .foreign_key(
                ForeignKey::create()
                    .name("fk_comment_recipe")
                    .from(Comment::Table, Comment::RecipeId)
                    .to(Recipe::Table, Recipe::Id)
                    .on_delete(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_comment_user")
                    .from(Comment::Table, Comment::UserId)
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
        super::execute(connection, Table::drop().table(Comment::Table).to_owned()).await
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
            .name("idx_comment_recipe_id")
            .table(Comment::Table)
            .col(Comment::RecipeId)
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::drop()
            .name("idx_comment_recipe_id")
            .table(Comment::Table)
            .to_owned();

        super::execute(connection, statement).await
    }
}

pub struct CreateIdx2;

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx2 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::create()
            .name("idx_comment_user_id")
            .table(Comment::Table)
            .col(Comment::UserId)
            .to_owned();

        super::execute(connection, statement).await
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = Index::drop()
            .name("idx_comment_user_id")
            .table(Comment::Table)
            .to_owned();

        super::execute(connection, statement).await
    }
}
