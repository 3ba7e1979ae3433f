use core::fmt;
use std::env;

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub static CONFIG: Lazy<AppConfig> =
    Lazy::new(|| AppConfig::load().unwrap_or_else(|e| panic!("{}", e)));

#[derive(Serialize, Deserialize, Debug)]
pub enum Runtime {
    Dev,
    Prod,
}

impl fmt::Display for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Runtime::Dev => write!(f, "development"),
            Runtime::Prod => write!(f, "production"),
        }
    }
}

impl From<String> for Runtime {
    fn from(value: String) -> Self {
        match value.as_str() {
            "DEVELOPMENT" => Runtime::Dev,
            "PRODUCTION" => Runtime::Prod,
            _ => Runtime::Prod,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub database_url: String,
}

fn default_address() -> String {
    "127.0.0.1".into()
}

fn default_port() -> String {
    "3000".into()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Base URL of the identity provider, e.g. `https://<project>.supabase.co/auth/v1`
    pub issuer: String,
    pub audience: String,
}

impl AppConfig {
    fn load() -> Result<Self, ConfigError> {
        let runtime: Runtime = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| "DEVELOPMENT".into())
            .into();

        let config: AppConfig = Config::builder()
            .add_source(File::with_name(&format!("src/config/{}.toml", runtime)))
            .add_source(Environment::with_prefix("QUIZNIGHT").separator("__"))
            .build()?
            .try_deserialize()?;

        debug!(
            "Loaded config: {}",
            serde_json::to_string_pretty(&config).unwrap()
        );

        Ok(config)
    }
}
