use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::CookieJar;
use cookbook_user::LoginInput;
use serde::Deserialize;

use crate::{
    auth::{self, AuthUser},
    notice::{self, Notice},
    routes::AppState,
    template::{PageContext, Template},
};

#[derive(askama::Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub ctx: PageContext,
    pub error: Option<String>,
    pub username: String,
}

pub async fn page(template: Template) -> impl IntoResponse {
    template.render(LoginTemplate {
        ctx: template.ctx(),
        error: None,
        username: String::new(),
    })
}

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct ActionInput {
    pub username: String,
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
        .login(LoginInput {
            username: input.username.to_owned(),
            password: input.password,
        })
        .await;

    let user_id = match result {
        Ok(user_id) => user_id,
        Err(
            cookbook_shared::Error::Validation(message) | cookbook_shared::Error::Auth(message),
        ) => {
            return template.render(LoginTemplate {
                ctx: template.ctx(),
                error: Some(message),
                username: input.username,
            });
        }
        Err(err) => return template.error(err),
    };

    let cookie = match auth::build_cookie(&app.config.session, user_id) {
        Ok(cookie) => cookie,
        Err(err) => {
            tracing::error!(user_id, err = %err, "failed to issue session token");

            return template.server_error();
        }
    };

    (
        notice::set(jar.add(cookie), Notice::LoggedIn),
        Redirect::to("/"),
    )
        .into_response()
}

pub async fn logout(_user: AuthUser, jar: CookieJar) -> impl IntoResponse {
    (
        notice::set(auth::remove_cookie(jar), Notice::LoggedOut),
        Redirect::to("/"),
    )
}
