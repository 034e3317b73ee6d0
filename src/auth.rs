use std::{
    convert::Infallible,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{extract::FromRequestParts, http::request::Parts, response::Redirect};
use axum_extra::extract::{
    CookieJar,
    cookie::{Cookie, SameSite},
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::{config::SessionConfig, routes::AppState};

pub const AUTH_COOKIE_NAME: &str = "auth_token";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    aud: String,
    exp: u64,
    iat: u64,
    iss: String,
    sub: String,
}

pub fn generate_token(config: &SessionConfig, user_id: i64) -> anyhow::Result<String> {
    let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
    let claims = Claims {
        aud: config.audience.to_owned(),
        exp: now + config.lifetime_days * 24 * 60 * 60,
        iat: now,
        iss: config.issuer.to_owned(),
        sub: user_id.to_string(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(token)
}

/// Return the user id carried by a valid token.
pub fn verify_token(config: &SessionConfig, token: &str) -> Option<i64> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[config.issuer.to_owned()]);
    validation.set_audience(&[config.audience.to_owned()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .ok()?;

    token_data.claims.sub.parse().ok()
}

pub fn build_cookie<'a>(config: &SessionConfig, user_id: i64) -> anyhow::Result<Cookie<'a>> {
    let token = generate_token(config, user_id)?;

    Ok(Cookie::build((AUTH_COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Strict)
        .build())
}

pub fn remove_cookie(jar: CookieJar) -> CookieJar {
    jar.remove(Cookie::build(AUTH_COOKIE_NAME).path("/"))
}

/// Identity of the requester, resolved once per request and cached in the request extensions.
#[derive(Debug, Clone, Default)]
pub struct Identity(pub Option<cookbook_user::User>);

impl FromRequestParts<AppState> for Identity {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>() {
            return Ok(identity.clone());
        }

        let identity = Identity(resolve(parts, state).await);
        parts.extensions.insert(identity.clone());

        Ok(identity)
    }
}

async fn resolve(parts: &Parts, state: &AppState) -> Option<cookbook_user::User> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(AUTH_COOKIE_NAME)?;
    let user_id = verify_token(&state.config.session, token.value())?;

    match state.user_command.find(user_id).await {
        Ok(user) => user,
        Err(err) => {
            tracing::error!(user_id, err = %err, "failed to load session user");

            None
        }
    }
}

/// Authenticated requester. Anonymous requests are redirected to the login page.
#[derive(Debug, Clone)]
pub struct AuthUser(pub cookbook_user::User);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Ok(Identity(user)) = Identity::from_request_parts(parts, state).await;

        user.map(AuthUser).ok_or_else(|| Redirect::to("/login"))
    }
}
