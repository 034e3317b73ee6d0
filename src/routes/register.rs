use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use cookbook_user::RegisterInput;
use serde::Deserialize;

use crate::{
    notice::{self, Notice},
    routes::AppState,
    template::{PageContext, Template},
};

#[derive(askama::Template)]
#[template(path = "register.html")]
pub struct RegisterTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    pub username: String,
    pub email: String,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(RegisterTemplate {
        ctx: template.ctx(),
        error: None,
        username: String::new(),
        email: String::new(),
    })
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ActionInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub async fn action(
    template: Template,
    State(app): State<AppState>,
    jar: CookieJar,
    Form(input): Form<ActionInput>,
) -> impl IntoResponse {
    let result = app
        .user_command
        .register(RegisterInput {
            username: input.username.to_owned(),
            email: Some(input.email.to_owned()),
            password: input.password,
        })
        .await;

    match result {
        Ok(_) => (notice::set(jar, Notice::Registered), Redirect::to("/login")).into_response(),
        Err(
            cookbook_shared::Error::Validation(message) | cookbook_shared::Error::Conflict(message),
        ) => template.render(RegisterTemplate {
            ctx: template.ctx(),
            error: Some(message),
            username: input.username,
            email: input.email,
        }),
        Err(err) => template.error(err),
    }
}
