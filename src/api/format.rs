use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use serde_json::json;

use crate::{
    db,
    models::{app_state::AppState, error::ServerError},
};

/// Read-only format catalog. Formats feed provisioning; managing them is a
/// separate concern.
pub fn format_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_formats))
        .route("/{slug}", get(get_format))
        .with_state(state)
}

async fn get_formats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ServerError> {
    let formats = db::format::list_formats(state.get_pool()).await?;
    Ok(Json(formats))
}

async fn get_format(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let pool = state.get_pool();

    let Some(format) = db::format::find_format_by_slug(pool, &slug).await? else {
        return Err(ServerError::NotFound(format!(
            "Quiz format '{}' does not exist",
            slug
        )));
    };

    let rounds = db::format::list_format_rounds(pool, format.id).await?;

    Ok(Json(json!({
        "format": format,
        "rounds": rounds,
    })))
}
