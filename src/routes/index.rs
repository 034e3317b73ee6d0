use axum::{extract::State, response::IntoResponse};
use cookbook_recipe::query::{HOME_LIMIT, RecipeListItem, RecipesQuery};

use crate::{
    routes::AppState,
    template::{PageContext, Template},
};

#[derive(askama::Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub ctx: PageContext,
    pub recipes: Vec<RecipeListItem>,
}

pub async fn page(template: Template, State(app): State<AppState>) -> impl IntoResponse {
    let recipes = crate::try_page_response!(
        app.recipe_query.filter(RecipesQuery {
            limit: Some(HOME_LIMIT),
            ..Default::default()
        }),
        template
    );

    template.render(IndexTemplate {
        ctx: template.ctx(),
        recipes,
    })
}
