use axum::{
    Router,
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

use crate::{assets::AssetsService, template::Template};

mod add;
mod detail;
mod download;
mod health;
mod index;
mod login;
mod recipes;
mod register;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub user_command: cookbook_user::Command,
    pub recipe_command: cookbook_recipe::Command,
    pub recipe_query: cookbook_recipe::Query,
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(config: crate::config::Config, state: cookbook_shared::State) -> Self {
        Self {
            config,
            user_command: cookbook_user::Command::new(state.clone()),
            recipe_command: cookbook_recipe::Command::new(state.clone()),
            recipe_query: cookbook_recipe::Query(state.clone()),
            pool: state.read_db,
        }
    }
}

/// Recipe id from the `{id}` path segment. Anything but an integer renders the 404 page.
#[derive(Debug, Clone, Copy)]
pub struct RecipeId(pub i64);

impl FromRequestParts<AppState> for RecipeId {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = Path::<(String,)>::from_request_parts(parts, state)
            .await
            .ok()
            .and_then(|Path((id,))| id.parse::<i64>().ok());

        match id {
            Some(id) => Ok(RecipeId(id)),
            None => {
                let Ok(template) = Template::from_request_parts(parts, state).await;

                Err(template.not_found())
            }
        }
    }
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.not_found()
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .with_state(app_state.pool.clone())
        .merge(
            Router::new()
                .route("/", get(index::page))
                .route("/recipes", get(recipes::page))
                .route("/recipe/{id}", get(detail::page).post(detail::action))
                .route("/recipe/{id}/delete", post(detail::delete))
                .route("/add", get(add::page).post(add::action))
                .route("/login", get(login::page).post(login::action))
                .route("/logout", get(login::logout))
                .route("/register", get(register::page).post(register::action))
                .route("/download/{id}", get(download::file))
                .nest_service("/static", AssetsService::new())
                .fallback(fallback)
                .with_state(app_state),
        )
        .layer(TraceLayer::new_for_http())
}
