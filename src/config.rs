use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub lifetime_days: u64,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_audience")]
    pub audience: String,
}

fn default_issuer() -> String {
    "cookbook".to_string()
}

fn default_audience() -> String {
    "cookbook-web".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeedConfig {
    #[serde(default = "default_seed_enabled")]
    pub enabled: bool,
    #[serde(default = "default_seed_username")]
    pub username: String,
    #[serde(default = "default_seed_email")]
    pub email: String,
    #[serde(default = "default_seed_password")]
    pub password: String,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: default_seed_enabled(),
            username: default_seed_username(),
            email: default_seed_email(),
            password: default_seed_password(),
        }
    }
}

impl From<&SeedConfig> for cookbook_recipe::seed::SeedUser {
    fn from(value: &SeedConfig) -> Self {
        Self {
            username: value.username.to_owned(),
            email: value.email.to_owned(),
            password: value.password.to_owned(),
        }
    }
}

fn default_seed_enabled() -> bool {
    true
}

fn default_seed_username() -> String {
    "chef".to_string()
}

fn default_seed_email() -> String {
    "chef@cookbook.local".to_string()
}

fn default_seed_password() -> String {
    "cookbook-chef".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy environment variables (SECRET_KEY, DATABASE_URL, PORT)
    /// 2. Prefixed environment variables (COOKBOOK__DATABASE__URL, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("database.url", "sqlite:local.db")?
            .set_default("database.max_connections", 5)?
            .set_default("session.secret", "cookbook-development-secret-key-change-me")?
            .set_default("session.lifetime_days", 7)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("COOKBOOK")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(secret) = env::var("SECRET_KEY") {
            builder = builder.set_override("session.secret", secret)?;
        }
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.session.secret.len() < 32 {
            return Err("Session secret must be at least 32 characters long".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        Ok(())
    }
}
