use cookbook_db::table::{Comment, Ingredient, Recipe, User};
use sea_query::{Alias, Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::prelude::FromRow;

#[derive(Debug, FromRow)]
struct DetailRow {
    id: i64,
    user_id: i64,
    name: String,
    instructions: String,
    prep_time: String,
    cuisine: String,
    created_at: i64,
    author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct IngredientView {
    pub amount: String,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct CommentView {
    pub id: i64,
    pub user_id: i64,
    pub author: String,
    pub rating: i64,
    pub text: String,
    pub created_at: i64,
}

#[derive(Debug, Clone)]
pub struct RecipeDetail {
    pub id: i64,
    pub user_id: i64,
    pub author: String,
    pub name: String,
    pub instructions: String,
    pub prep_time: String,
    pub cuisine: String,
    pub created_at: i64,
    pub ingredients: Vec<IngredientView>,
    pub tags: Vec<String>,
    pub comments: Vec<CommentView>,
}

impl RecipeDetail {
    /// Mean rating with one decimal, `None` without comments.
    pub fn average_rating(&self) -> Option<String> {
        if self.comments.is_empty() {
            return None;
        }

        let total: i64 = self.comments.iter().map(|c| c.rating).sum();
        let average = total as f64 / self.comments.len() as f64;

        Some(format!("{average:.1}"))
    }
}

impl super::Query {
    pub async fn find(&self, id: i64) -> cookbook_shared::Result<Option<RecipeDetail>> {
        let (sql, values) = sea_query::Query::select()
            .column((Recipe::Table, Recipe::Id))
            .column((Recipe::Table, Recipe::UserId))
            .column((Recipe::Table, Recipe::Name))
            .column((Recipe::Table, Recipe::Instructions))
            .column((Recipe::Table, Recipe::PrepTime))
            .column((Recipe::Table, Recipe::Cuisine))
            .column((Recipe::Table, Recipe::CreatedAt))
            .expr_as(
                Expr::col((User::Table, User::Username)),
                Alias::new("author"),
            )
            .from(Recipe::Table)
            .inner_join(
                User::Table,
                Expr::col((User::Table, User::Id)).equals((Recipe::Table, Recipe::UserId)),
            )
            .and_where(Expr::col((Recipe::Table, Recipe::Id)).eq(id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let Some(row) = sqlx::query_as_with::<_, DetailRow, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            return Ok(None);
        };

        let (sql, values) = sea_query::Query::select()
            .columns([Ingredient::Amount, Ingredient::Name])
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::RecipeId).eq(id))
            .order_by(Ingredient::Id, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let ingredients = sqlx::query_as_with::<_, IngredientView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let (sql, values) = sea_query::Query::select()
            .column((Comment::Table, Comment::Id))
            .column((Comment::Table, Comment::UserId))
            .expr_as(
                Expr::col((User::Table, User::Username)),
                Alias::new("author"),
            )
            .column((Comment::Table, Comment::Rating))
            .column((Comment::Table, Comment::Text))
            .column((Comment::Table, Comment::CreatedAt))
            .from(Comment::Table)
            .inner_join(
                User::Table,
                Expr::col((User::Table, User::Id)).equals((Comment::Table, Comment::UserId)),
            )
            .and_where(Expr::col((Comment::Table, Comment::RecipeId)).eq(id))
            .order_by((Comment::Table, Comment::Id), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let comments = sqlx::query_as_with::<_, CommentView, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let tags = super::list::find_tags(&self.read_db, vec![id])
            .await?
            .remove(&id)
            .unwrap_or_default();

        Ok(Some(RecipeDetail {
            id: row.id,
            user_id: row.user_id,
            author: row.author,
            name: row.name,
            instructions: row.instructions,
            prep_time: row.prep_time,
            cuisine: row.cuisine,
            created_at: row.created_at,
            ingredients,
            tags,
            comments,
        }))
    }
}
