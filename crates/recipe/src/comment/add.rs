use cookbook_db::table::{Comment, Recipe};
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

#[derive(Debug, Clone, Validate)]
pub struct AddCommentInput {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i64,
    pub text: String,
}

impl crate::Command {
    pub async fn add_comment(
        &self,
        recipe_id: i64,
        user_id: i64,
        input: AddCommentInput,
    ) -> cookbook_shared::Result<i64> {
        input.validate()?;

        let (sql, values) = Query::select()
            .column(Recipe::Id)
            .from(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(recipe_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        if sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
            .is_none()
        {
            cookbook_shared::not_found!();
        }

        let (sql, values) = Query::insert()
            .into_table(Comment::Table)
            .columns([
                Comment::RecipeId,
                Comment::UserId,
                Comment::Rating,
                Comment::Text,
                Comment::CreatedAt,
            ])
            .values_panic([
                recipe_id.into(),
                user_id.into(),
                input.rating.into(),
                input.text.trim().to_owned().into(),
                cookbook_shared::now().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        let id = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?
            .last_insert_rowid();

        tracing::info!(user_id, recipe_id, comment_id = id, "comment added");

        Ok(id)
    }
}
