use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{get, patch},
};
use uuid::Uuid;

use crate::{
    db,
    models::{
        app_state::AppState,
        auth::UserId,
        error::ServerError,
        question::SaveQuestionsRequest,
        round::UpdateRoundRequest,
    },
    service::scoring::save_round_questions,
};

pub fn round_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/{round_id}", patch(update_round))
        .route("/{round_id}/questions", get(get_questions).put(save_questions))
        .with_state(state)
}

async fn get_questions(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Path(round_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let pool = state.get_pool();

    let Some(round) = db::round::get_round_for_user(pool, round_id, user_id.0).await? else {
        return Err(ServerError::NotFound(format!(
            "Round with id {} does not exist",
            round_id
        )));
    };

    let questions = db::question::list_questions(pool, round.id).await?;
    Ok(Json(questions))
}

async fn save_questions(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Path(round_id): Path<Uuid>,
    Json(request): Json<SaveQuestionsRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let response = save_round_questions(state.get_pool(), user_id.0, round_id, request).await?;
    Ok(Json(response))
}

async fn update_round(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Path(round_id): Path<Uuid>,
    Json(request): Json<UpdateRoundRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let round =
        db::round::update_round_meta(state.get_pool(), round_id, user_id.0, &request).await?;
    Ok(Json(round))
}
