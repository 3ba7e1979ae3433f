use axum::{Json, extract::FromRequest, http::StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use validator::{Validate, ValidationError};

use crate::models::error::ServerError;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send + 'static,
    S: Send + Sync,
{
    type Rejection = ServerError;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|h| h.to_str().ok())
            .ok_or_else(|| ServerError::Api(StatusCode::BAD_REQUEST, "Invalid JSON".to_string()))?;

        let value = if content_type.starts_with("application/json") {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(val)) => val,
                Err(_) => {
                    return Err(ServerError::Api(
                        StatusCode::BAD_REQUEST,
                        "Invalid JSON".into(),
                    ));
                }
            }
        } else {
            return Err(ServerError::Api(
                StatusCode::BAD_REQUEST,
                "Expected JSON".to_string(),
            ));
        };

        match value.validate() {
            Ok(_) => {
                debug!("Validation passed");
                Ok(ValidatedJson(value))
            }
            Err(e) => {
                let error_msg = format_validation_errors(&e);
                info!("Validation error: {}", error_msg);
                Err(ServerError::Validation(error_msg))
            }
        }
    }
}

/// Format validation errors into a user-friendly message
fn format_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let msg = error
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{} validation failed", field));
            messages.push(msg);
        }
    }

    if messages.is_empty() {
        "Validation failed".to_string()
    } else {
        messages.join(", ")
    }
}

// Validation functions for reuse across models

/// Validate roster entries: at most 60 characters each once trimmed.
/// Emptiness is checked after normalization, not here.
pub fn validate_team_names(names: &[String]) -> Result<(), ValidationError> {
    for name in names {
        if name.trim().len() > 60 {
            return Err(ValidationError::new("team_name_too_long")
                .with_message("Team member names must be at most 60 characters".into()));
        }
    }

    Ok(())
}
