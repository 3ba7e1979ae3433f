use std::sync::Arc;

use reqwest::Client;
use sqlx::{Pool, Postgres};

use crate::{
    config::app_config::CONFIG,
    models::{auth::Jwks, error::ServerError},
};

#[derive(Clone)]
pub struct AppState {
    pool: Pool<Postgres>,
    jwks: Jwks,
}

impl AppState {
    pub async fn from_connection_string(connection_string: &str) -> Result<Arc<Self>, ServerError> {
        let pool = Pool::<Postgres>::connect(connection_string).await?;
        let client = Client::new();

        let jwks_url = format!("{}/.well-known/jwks.json", CONFIG.auth.issuer);
        let response = client.get(jwks_url).send().await?;
        let jwks = response.json::<Jwks>().await?;

        let state = Arc::new(Self { pool, jwks });

        Ok(state)
    }

    pub fn get_pool(&self) -> &Pool<Postgres> {
        &self.pool
    }

    pub fn get_jwks(&self) -> &Jwks {
        &self.jwks
    }
}
