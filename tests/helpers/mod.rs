#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use cookbook::config::{
    Config, DatabaseConfig, ObservabilityConfig, SeedConfig, ServerConfig, SessionConfig,
};
use cookbook_recipe::CreateInput;
use cookbook_user::RegisterInput;
use http_body_util::BodyExt;
use temp_dir::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub router: Router,
    pub state: cookbook_shared::State,
    _dir: TempDir,
}

impl TestApp {
    pub async fn send(&self, req: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(req)
            .await
            .expect("router is infallible")
    }

    pub async fn create_user(&self, name: &str) -> anyhow::Result<i64> {
        Ok(cookbook_user::Command::new(self.state.clone())
            .register(RegisterInput {
                username: name.to_owned(),
                email: Some(format!("{name}@cookbook.localhost")),
                password: "my_password".to_owned(),
            })
            .await?)
    }

    /// Register `name` and log in through the form, returning the `auth_token=...` cookie pair.
    pub async fn login(&self, name: &str) -> anyhow::Result<String> {
        self.create_user(name).await?;

        let resp = self
            .send(post_form(
                "/login",
                &[("username", name), ("password", "my_password")],
                None,
            ))
            .await;

        auth_cookie(&resp).ok_or_else(|| anyhow::anyhow!("login did not set a session cookie"))
    }

    pub async fn create_recipe(
        &self,
        user_id: i64,
        name: &str,
        ingredients: &str,
        tags: &str,
    ) -> anyhow::Result<i64> {
        Ok(cookbook_recipe::Command::new(self.state.clone())
            .create(
                user_id,
                CreateInput {
                    name: name.to_owned(),
                    instructions: "Mix everything and bake.".to_owned(),
                    prep_time: "45 minutes".to_owned(),
                    cuisine: "American".to_owned(),
                    ingredients: ingredients.to_owned(),
                    tags: tags.to_owned(),
                },
            )
            .await?)
    }

    pub async fn count(&self, table: &str) -> anyhow::Result<i64> {
        let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.state.read_db)
            .await?;

        Ok(count)
    }
}

pub fn test_config(url: String) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 5000,
        },
        database: DatabaseConfig {
            url,
            max_connections: 2,
        },
        session: SessionConfig {
            secret: "test_secret_key_minimum_32_characters_long".to_owned(),
            lifetime_days: 7,
            issuer: "cookbook".to_owned(),
            audience: "cookbook-web".to_owned(),
        },
        observability: ObservabilityConfig::default(),
        seed: SeedConfig {
            enabled: false,
            ..Default::default()
        },
    }
}

pub async fn setup_test_app() -> anyhow::Result<TestApp> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.child("cookbook.db").display());
    let state = cookbook::db::connect(&url, 2).await?;
    let router = cookbook::router(cookbook::AppState::new(test_config(url), state.clone()));

    Ok(TestApp {
        router,
        state,
        _dir: dir,
    })
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).expect("valid request")
}

pub fn post_form(uri: &str, form: &[(&str, &str)], cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let body = serde_urlencoded::to_string(form).expect("encodable form");

    builder.body(Body::from(body)).expect("valid request")
}

pub async fn body_bytes(resp: Response<Body>) -> Vec<u8> {
    resp.into_body()
        .collect()
        .await
        .expect("readable body")
        .to_bytes()
        .to_vec()
}

pub async fn body_string(resp: Response<Body>) -> String {
    String::from_utf8_lossy(&body_bytes(resp).await).into_owned()
}

pub fn location(resp: &Response<Body>) -> Option<&str> {
    resp.headers()
        .get(header::LOCATION)
        .and_then(|v| v.to_str().ok())
}

pub fn set_cookies(resp: &Response<Body>) -> Vec<String> {
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::to_owned)
        .collect()
}

pub fn auth_cookie(resp: &Response<Body>) -> Option<String> {
    set_cookies(resp)
        .into_iter()
        .find(|c| c.starts_with("auth_token=") && !c.starts_with("auth_token=;"))
        .and_then(|c| c.split(';').next().map(str::to_owned))
}
