use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use cookbook_recipe::query::{RecipeListItem, RecipesQuery};
use serde::Deserialize;

use crate::{
    routes::AppState,
    template::{PageContext, Template},
};

#[derive(askama::Template)]
#[template(path = "recipes.html")]
pub struct RecipesTemplate {
    pub ctx: PageContext,
    pub q: String,
    pub tag: String,
    pub recipes: Vec<RecipeListItem>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct PageQuery {
    pub q: String,
    pub tag: String,
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    Query(input): Query<PageQuery>,
) -> impl IntoResponse {
    let recipes = crate::try_page_response!(
        app.recipe_query.filter(RecipesQuery {
            q: Some(input.q.to_owned()),
            tag: Some(input.tag.to_owned()),
            limit: None,
        }),
        template
    );

    template.render(RecipesTemplate {
        ctx: template.ctx(),
        q: input.q,
        tag: input.tag,
        recipes,
    })
}
