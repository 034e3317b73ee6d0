use cookbook_db::table::{Ingredient, Recipe, RecipeTag, Tag};
use cookbook_shared::FILL_ALL_FIELDS;
use sea_query::{Expr, ExprTrait, OnConflict, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use validator::Validate;

use crate::parse::{parse_ingredients, parse_tags};

#[derive(Debug, Clone, Default, Validate)]
pub struct CreateInput {
    #[validate(length(min = 1, message = "Please fill out all fields!"))]
    pub name: String,
    #[validate(length(min = 1, message = "Please fill out all fields!"))]
    pub instructions: String,
    #[validate(length(min = 1, message = "Please fill out all fields!"))]
    pub prep_time: String,
    #[validate(length(min = 1, message = "Please fill out all fields!"))]
    pub cuisine: String,
    pub ingredients: String,
    pub tags: String,
}

impl super::Command {
    pub async fn create(&self, user_id: i64, input: CreateInput) -> cookbook_shared::Result<i64> {
        let input = CreateInput {
            name: input.name.trim().to_owned(),
            instructions: input.instructions.trim().to_owned(),
            prep_time: input.prep_time.trim().to_owned(),
            cuisine: input.cuisine.trim().to_owned(),
            ingredients: input.ingredients,
            tags: input.tags,
        };

        input.validate()?;

        let ingredients = parse_ingredients(&input.ingredients);
        if ingredients.is_empty() {
            cookbook_shared::invalid!("{FILL_ALL_FIELDS}");
        }

        let tags = parse_tags(&input.tags);
        let name_lower = input.name.to_lowercase();
        let mut tx = self.write_db.begin().await?;

        let (sql, values) = Query::insert()
            .into_table(Recipe::Table)
            .columns([
                Recipe::UserId,
                Recipe::Name,
                Recipe::NameLower,
                Recipe::Instructions,
                Recipe::PrepTime,
                Recipe::Cuisine,
                Recipe::CreatedAt,
            ])
            .values_panic([
                user_id.into(),
                input.name.into(),
                name_lower.into(),
                input.instructions.into(),
                input.prep_time.into(),
                input.cuisine.into(),
                cookbook_shared::now().into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        let id = sqlx::query_with(&sql, values)
            .execute(&mut *tx)
            .await?
            .last_insert_rowid();

        let mut statement = Query::insert()
            .into_table(Ingredient::Table)
            .columns([Ingredient::RecipeId, Ingredient::Amount, Ingredient::Name])
            .to_owned();

        for ingredient in ingredients {
            statement.values_panic([id.into(), ingredient.amount.into(), ingredient.name.into()]);
        }

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *tx).await?;

        for tag in tags {
            let (sql, values) = Query::insert()
                .into_table(Tag::Table)
                .columns([Tag::Name, Tag::NameLower])
                .values_panic([tag.to_owned().into(), tag.to_lowercase().into()])
                .on_conflict(OnConflict::column(Tag::Name).do_nothing().to_owned())
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            let (sql, values) = Query::select()
                .column(Tag::Id)
                .from(Tag::Table)
                .and_where(Expr::col(Tag::Name).eq(tag))
                .limit(1)
                .build_sqlx(SqliteQueryBuilder);

            let (tag_id,) = sqlx::query_as_with::<_, (i64,), _>(&sql, values)
                .fetch_one(&mut *tx)
                .await?;

            let (sql, values) = Query::insert()
                .into_table(RecipeTag::Table)
                .columns([RecipeTag::RecipeId, RecipeTag::TagId])
                .values_panic([id.into(), tag_id.into()])
                .build_sqlx(SqliteQueryBuilder);

            sqlx::query_with(&sql, values).execute(&mut *tx).await?;
        }

        tx.commit().await?;

        tracing::info!(user_id, recipe_id = id, "recipe created");

        Ok(id)
    }
}
