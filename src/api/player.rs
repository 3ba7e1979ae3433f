use std::sync::Arc;

use axum::{Extension, Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::{
    db,
    models::{app_state::AppState, auth::UserId, error::ServerError},
};

pub fn player_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_players))
        .with_state(state)
}

async fn get_players(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> Result<impl IntoResponse, ServerError> {
    let players = db::player::list_players(state.get_pool(), user_id.0).await?;
    Ok(Json(players))
}
