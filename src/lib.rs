pub mod assets;
pub mod auth;
pub mod config;
pub mod db;
pub mod notice;
pub mod observability;
pub mod routes;
pub mod template;

pub use config::Config;
pub use routes::{AppState, router};
