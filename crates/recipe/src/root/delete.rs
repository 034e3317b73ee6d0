use cookbook_db::table::{Comment, Ingredient, Recipe, RecipeTag};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Delete a recipe with its ingredients, comments and tag links. Tags are kept.
    pub async fn delete(&self, user_id: i64, id: i64) -> cookbook_shared::Result<()> {
        let (sql, values) = Query::select()
            .column(Recipe::UserId)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let Some((author_id,)) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            cookbook_shared::not_found!();
        };

        if author_id != user_id {
            return Err(cookbook_shared::Error::Forbidden);
        }

        let mut tx = self.write_db.begin().await?;

        let (sql, values) = Query::delete()
            .from_table(Comment::Table)
            .and_where(Expr::col(Comment::RecipeId).eq(id))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::delete()
            .from_table(Ingredient::Table)
            .and_where(Expr::col(Ingredient::RecipeId).eq(id))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::delete()
            .from_table(RecipeTag::Table)
            .and_where(Expr::col(RecipeTag::RecipeId).eq(id))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        let (sql, values) = Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        tx.commit().await?;

        tracing::info!(user_id, recipe_id = id, "recipe deleted");

        Ok(())
    }
}
