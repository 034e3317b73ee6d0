use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use crate::{
    auth::Identity,
    notice::{self, Notice},
    routes::AppState,
};

pub(crate) mod filters {
    #[askama::filter_fn]
    pub fn relative_time(timestamp: &i64, _values: &dyn askama::Values) -> askama::Result<String> {
        Ok(cookbook_shared::format_relative_time(*timestamp))
    }
}

/// Values shared by every page: the navbar identity and the pending notice.
#[derive(Debug, Clone, Default)]
pub struct PageContext {
    pub user: Option<cookbook_user::User>,
    pub notice: Option<Notice>,
}

pub struct Template {
    ctx: PageContext,
    jar: CookieJar,
}

impl Template {
    pub fn ctx(&self) -> PageContext {
        self.ctx.clone()
    }

    pub fn render<T: askama::Template>(&self, template: T) -> Response {
        self.render_status(StatusCode::OK, template)
    }

    pub fn render_status<T: askama::Template>(&self, status: StatusCode, template: T) -> Response {
        match template.render() {
            Ok(html) => (status, self.jar.clone(), Html(html)).into_response(),
            Err(err) => {
                tracing::error!(err = %err, "failed to render template");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to render template. Error: {err}"),
                )
                    .into_response()
            }
        }
    }

    pub fn not_found(&self) -> Response {
        self.render_status(
            StatusCode::NOT_FOUND,
            NotFoundTemplate { ctx: self.ctx() },
        )
    }

    pub fn forbidden(&self) -> Response {
        self.render_status(
            StatusCode::FORBIDDEN,
            ForbiddenTemplate { ctx: self.ctx() },
        )
    }

    pub fn server_error(&self) -> Response {
        self.render_status(
            StatusCode::INTERNAL_SERVER_ERROR,
            ServerTemplate { ctx: self.ctx() },
        )
    }

    /// Error page for failures that are not shown inline in a form.
    pub fn error(&self, err: cookbook_shared::Error) -> Response {
        match err {
            cookbook_shared::Error::NotFound => self.not_found(),
            cookbook_shared::Error::Forbidden => self.forbidden(),
            err => {
                tracing::error!(err = %err, "request failed");

                self.server_error()
            }
        }
    }
}

impl FromRequestParts<AppState> for Template {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(Identity(user)) = Identity::from_request_parts(parts, state).await;
        let (jar, notice) = notice::take(CookieJar::from_headers(&parts.headers));

        Ok(Template {
            ctx: PageContext { user, notice },
            jar,
        })
    }
}

#[derive(askama::Template)]
#[template(path = "404.html")]
pub struct NotFoundTemplate {
    pub ctx: PageContext,
}

#[derive(askama::Template)]
#[template(path = "403.html")]
pub struct ForbiddenTemplate {
    pub ctx: PageContext,
}

#[derive(askama::Template)]
#[template(path = "500.html")]
pub struct ServerTemplate {
    pub ctx: PageContext,
}

#[macro_export]
macro_rules! try_page_response {
    ($result:expr, $template:expr) => {
        match $result.await {
            Ok(r) => r,
            Err(err) => return $template.error(err),
        }
    };

    (opt: $result:expr, $template:expr) => {
        match $result.await {
            Ok(Some(r)) => r,
            Ok(_) => return $template.not_found(),
            Err(err) => return $template.error(err),
        }
    };
}
