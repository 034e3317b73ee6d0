use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use cookbook_recipe::CreateInput;
use serde::Deserialize;

use crate::{
    auth::AuthUser,
    notice::{self, Notice},
    routes::AppState,
    template::{PageContext, Template},
};

#[derive(askama::Template)]
#[template(path = "add.html")]
pub struct AddTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    pub form: AddForm,
}

#[derive(Deserialize, Default, Clone)]
#[serde(default)]
pub struct AddForm {
    pub name: String,
    pub instructions: String,
    pub prep_time: String,
    pub cuisine: String,
    pub ingredients: String,
    pub tags: String,
}

pub async fn page(_user: AuthUser, template: Template) -> impl IntoResponse {
    template.render(AddTemplate {
        ctx: template.ctx(),
        error: None,
        form: AddForm::default(),
    })
}

pub async fn action(
    AuthUser(user): AuthUser,
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Form(input): Form<AddForm>,
) -> impl IntoResponse {
    let result = app
        .recipe_command
        .create(
            user.id,
            CreateInput {
                name: input.name.to_owned(),
                instructions: input.instructions.to_owned(),
                prep_time: input.prep_time.to_owned(),
                cuisine: input.cuisine.to_owned(),
                ingredients: input.ingredients.to_owned(),
                tags: input.tags.to_owned(),
            },
        )
        .await;

    match result {
        Ok(_) => (notice::set(jar, Notice::RecipeAdded), Redirect::to("/")).into_response(),
        Err(cookbook_shared::Error::Validation(message)) => template.render(AddTemplate {
            ctx: template.ctx(),
            error: Some(message),
            form: input,
        }),
        Err(err) => {
            tracing::error!(user_id = user.id, err = %err, "failed to create recipe");

            template.error(err)
        }
    }
}
