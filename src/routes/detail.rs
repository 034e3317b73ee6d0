use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use cookbook_recipe::{AddCommentInput, query::RecipeDetail};
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    notice::{self, Notice},
    routes::{AppState, RecipeId},
    template::{PageContext, Template, filters},
};

#[derive(askama::Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate {
    pub ctx: PageContext,
    pub recipe: RecipeDetail,
    pub is_author: bool,
    pub error: Option<String>,
    pub form: CommentForm,
}

#[derive(Deserialize, Clone)]
#[serde(default)]
pub struct CommentForm {
    pub rating: String,
    pub text: String,
}

impl Default for CommentForm {
    fn default() -> Self {
        Self {
            rating: "5".to_owned(),
            text: String::new(),
        }
    }
}

pub async fn page(
    template: Template,
    State(app): State<AppState>,
    RecipeId(id): RecipeId,
) -> impl IntoResponse {
    let recipe = crate::try_page_response!(opt: app.recipe_query.find(id), template);
    let ctx = template.ctx();

    template.render(DetailTemplate {
        is_author: ctx.user.as_ref().is_some_and(|u| u.id == recipe.user_id),
        ctx,
        recipe,
        error: None,
        form: CommentForm::default(),
    })
}

pub async fn action(
    AuthUser(user): AuthUser,
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    RecipeId(id): RecipeId,
    Form(input): Form<CommentForm>,
) -> impl IntoResponse {
    // A rating that is not a number is reported like an out-of-range one.
    let rating = input.rating.trim().parse::<i64>().unwrap_or(0);

    let result = app
        .recipe_command
        .add_comment(
            id,
            user.id,
            AddCommentInput {
                rating,
                text: input.text.to_owned(),
            },
        )
        .await;

    match result {
        Ok(_) => (
            notice::set(jar, Notice::CommentAdded),
            Redirect::to(&format!("/recipe/{id}")),
        )
            .into_response(),
        Err(cookbook_shared::Error::Validation(message)) => {
            let recipe = crate::try_page_response!(opt: app.recipe_query.find(id), template);

            template.render(DetailTemplate {
                is_author: recipe.user_id == user.id,
                ctx: template.ctx(),
                recipe,
                error: Some(message),
                form: input,
            })
        }
        Err(err) => {
            tracing::error!(user_id = user.id, recipe_id = id, err = %err, "failed to add comment");

            template.error(err)
        }
    }
}

pub async fn delete(
    AuthUser(user): AuthUser,
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    RecipeId(id): RecipeId,
) -> impl IntoResponse {
    match app.recipe_command.delete(user.id, id).await {
        Ok(_) => (
            notice::set(jar, Notice::RecipeDeleted),
            Redirect::to("/recipes"),
        )
            .into_response(),
        Err(err) => {
            tracing::warn!(user_id = user.id, recipe_id = id, err = %err, "failed to delete recipe");

            template.error(err)
        }
    }
}
