use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Sqlx failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Api error: {1}")]
    Api(StatusCode, String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Access denied error")]
    AccessDenied,

    #[error("JWT verification error: {0}")]
    JwtVerification(String),

    #[error("Request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ServerError::Sqlx(e) => {
                error!("Sqlx failed with error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            }
            ServerError::Internal(e) => {
                error!("Internal server error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            }
            ServerError::Api(sc, msg) => {
                error!("Api error: {} - {}", sc, msg);
                (sc, msg)
            }
            ServerError::Validation(e) => {
                warn!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, e)
            }
            ServerError::NotFound(e) => {
                warn!("Entity not found: {}", e);
                (StatusCode::NOT_FOUND, e)
            }
            ServerError::Configuration(e) => {
                warn!("Configuration error: {}", e);
                (StatusCode::UNPROCESSABLE_ENTITY, e)
            }
            ServerError::AccessDenied => {
                warn!("Access denied for requesting entity");
                (StatusCode::UNAUTHORIZED, String::from("Access denied"))
            }
            ServerError::JwtVerification(e) => {
                warn!("Failed to verify JWT: {}", e);
                (StatusCode::UNAUTHORIZED, String::new())
            }
            ServerError::Reqwest(e) => {
                error!("Failed to send request: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    String::from("Failed to access third party"),
                )
            }
            ServerError::Json(e) => {
                error!("Json error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, String::new())
            }
        }
        .into_response()
    }
}
