use std::collections::HashMap;

use cookbook_db::table::{Recipe, RecipeTag, Tag, User};
use sea_query::{Alias, Expr, ExprTrait, Func, LikeExpr, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use super::contains_pattern;

pub const HOME_LIMIT: u64 = 6;

#[derive(Debug, Default, Clone)]
pub struct RecipesQuery {
    pub q: Option<String>,
    pub tag: Option<String>,
    pub limit: Option<u64>,
}

#[derive(Debug, FromRow)]
struct RecipeRow {
    id: i64,
    name: String,
    cuisine: String,
    prep_time: String,
    author: String,
}

#[derive(Debug, Clone)]
pub struct RecipeListItem {
    pub id: i64,
    pub name: String,
    pub cuisine: String,
    pub prep_time: String,
    pub author: String,
    pub tags: Vec<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

impl super::Query {
    /// Recipes in ascending id order. `q` matches the name and `tag` matches any tag name,
    /// both as case-insensitive substrings. Matching runs on the `name_lower` columns because
    /// SQLite `LIKE` only folds ASCII.
    pub async fn filter(
        &self,
        query: RecipesQuery,
    ) -> cookbook_shared::Result<Vec<RecipeListItem>> {
        let mut statement = sea_query::Query::select()
            .column((Recipe::Table, Recipe::Id))
            .column((Recipe::Table, Recipe::Name))
            .column((Recipe::Table, Recipe::Cuisine))
            .column((Recipe::Table, Recipe::PrepTime))
            .expr_as(
                Expr::col((User::Table, User::Username)),
                Alias::new("author"),
            )
            .from(Recipe::Table)
            .inner_join(
                User::Table,
                Expr::col((User::Table, User::Id)).equals((Recipe::Table, Recipe::UserId)),
            )
            .order_by((Recipe::Table, Recipe::Id), Order::Asc)
            .to_owned();

        if let Some(q) = non_blank(query.q) {
            statement.and_where(
                Expr::col((Recipe::Table, Recipe::NameLower))
                    .like(LikeExpr::new(contains_pattern(&q.to_lowercase())).escape('\\')),
            );
        }

        if let Some(tag) = non_blank(query.tag) {
            statement.and_where(
                Expr::col((Recipe::Table, Recipe::Id)).in_subquery(
                    sea_query::Query::select()
                        .column((RecipeTag::Table, RecipeTag::RecipeId))
                        .from(RecipeTag::Table)
                        .inner_join(
                            Tag::Table,
                            Expr::col((Tag::Table, Tag::Id))
                                .equals((RecipeTag::Table, RecipeTag::TagId)),
                        )
                        .and_where(
                            Expr::col((Tag::Table, Tag::NameLower)).like(
                                LikeExpr::new(contains_pattern(&tag.to_lowercase())).escape('\\'),
                            ),
                        )
                        .to_owned(),
                ),
            );
        }

        if let Some(limit) = query.limit {
            statement.limit(limit);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let mut tags = find_tags(&self.read_db, rows.iter().map(|row| row.id).collect()).await?;

        Ok(rows
            .into_iter()
            .map(|row| RecipeListItem {
                tags: tags.remove(&row.id).unwrap_or_default(),
                id: row.id,
                name: row.name,
                cuisine: row.cuisine,
                prep_time: row.prep_time,
                author: row.author,
            })
            .collect())
    }

    pub async fn count(&self) -> cookbook_shared::Result<i64> {
        let (sql, values) = sea_query::Query::select()
            .expr(Func::count(Expr::col(Recipe::Id)))
            .from(Recipe::Table)
            .build_sqlx(SqliteQueryBuilder);

        let (count,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
            .fetch_one(&self.read_db)
            .await?;

        Ok(count)
    }
}

/// Tag names per recipe id, sorted by name.
pub(crate) async fn find_tags(
    pool: &SqlitePool,
    recipe_ids: Vec<i64>,
) -> cookbook_shared::Result<HashMap<i64, Vec<String>>> {
    let mut tags: HashMap<i64, Vec<String>> = HashMap::new();

    if recipe_ids.is_empty() {
        return Ok(tags);
    }

    let (sql, values) = sea_query::Query::select()
        .column((RecipeTag::Table, RecipeTag::RecipeId))
        .column((Tag::Table, Tag::Name))
        .from(RecipeTag::Table)
        .inner_join(
            Tag::Table,
            Expr::col((Tag::Table, Tag::Id)).equals((RecipeTag::Table, RecipeTag::TagId)),
        )
        .and_where(Expr::col((RecipeTag::Table, RecipeTag::RecipeId)).is_in(recipe_ids))
        .order_by((Tag::Table, Tag::Name), Order::Asc)
        .build_sqlx(SqliteQueryBuilder);

    let rows = sqlx::query_as_with::<_, (i64, String), _>(&sql, values)
        .fetch_all(pool)
        .await?;

    for (recipe_id, name) in rows {
        tags.entry(recipe_id).or_default().push(name);
    }

    Ok(tags)
}
