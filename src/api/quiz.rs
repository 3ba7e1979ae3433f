use std::sync::Arc;

use axum::{
    Extension, Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, put},
};
use uuid::Uuid;

use crate::{
    api::validation::ValidatedJson,
    db,
    models::{
        app_state::AppState,
        auth::UserId,
        error::ServerError,
        player::ReplaceRosterRequest,
        quiz::{CreateQuizOutcome, CreateQuizRequest, QuizDetail, UpdateQuizRequest},
    },
    service::{
        provisioning::{create_quiz_from_format, normalize_team_names},
        scoring::validate_joker_selection,
    },
};

pub fn quiz_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(get_quizzes).post(create_quiz))
        .route(
            "/{quiz_id}",
            get(get_quiz).patch(update_quiz).delete(delete_quiz),
        )
        .route("/{quiz_id}/players", put(replace_roster))
        .with_state(state)
}

async fn create_quiz(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    ValidatedJson(request): ValidatedJson<CreateQuizRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let outcome = create_quiz_from_format(state.get_pool(), user_id.0, request).await?;

    let status = match &outcome {
        CreateQuizOutcome::Created { .. } => StatusCode::CREATED,
        CreateQuizOutcome::Duplicate { .. } => StatusCode::OK,
    };

    Ok((status, Json(outcome)))
}

async fn get_quizzes(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
) -> Result<impl IntoResponse, ServerError> {
    let quizzes = db::quiz::list_quizzes(state.get_pool(), user_id.0).await?;
    Ok(Json(quizzes))
}

async fn get_quiz(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Path(quiz_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    let pool = state.get_pool();

    let Some(quiz) = db::quiz::get_quiz_by_id(pool, user_id.0, quiz_id).await? else {
        return Err(ServerError::NotFound(format!(
            "Quiz with id {} does not exist",
            quiz_id
        )));
    };

    let rounds = db::round::list_rounds(pool, quiz_id).await?;
    let players = db::player::list_quiz_players(pool, quiz_id).await?;

    Ok(Json(QuizDetail {
        quiz,
        rounds,
        players,
    }))
}

async fn update_quiz(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Path(quiz_id): Path<Uuid>,
    Json(request): Json<UpdateQuizRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let pool = state.get_pool();

    let Some(quiz) = db::quiz::get_quiz_by_id(pool, user_id.0, quiz_id).await? else {
        return Err(ServerError::NotFound(format!(
            "Quiz with id {} does not exist",
            quiz_id
        )));
    };

    // Reject ineligible joker picks here so the scoring guard never has to
    // fire. A quiz whose format was deleted keeps the permissive default.
    if let Some(joker) = request.joker_round_number {
        let has_joker = match quiz.format_id {
            Some(format_id) => db::format::get_format_by_id(pool, format_id)
                .await?
                .map(|f| f.has_joker)
                .unwrap_or(true),
            None => true,
        };

        let rounds = db::round::list_rounds(pool, quiz_id).await?;
        validate_joker_selection(has_joker, &rounds, joker)?;
    }

    let quiz = db::quiz::update_quiz(pool, user_id.0, quiz_id, &request).await?;
    Ok(Json(quiz))
}

async fn delete_quiz(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Path(quiz_id): Path<Uuid>,
) -> Result<impl IntoResponse, ServerError> {
    db::quiz::delete_quiz(state.get_pool(), user_id.0, quiz_id).await?;
    Ok(StatusCode::OK)
}

async fn replace_roster(
    State(state): State<Arc<AppState>>,
    Extension(user_id): Extension<UserId>,
    Path(quiz_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<ReplaceRosterRequest>,
) -> Result<impl IntoResponse, ServerError> {
    let pool = state.get_pool();

    let Some(quiz) = db::quiz::get_quiz_by_id(pool, user_id.0, quiz_id).await? else {
        return Err(ServerError::NotFound(format!(
            "Quiz with id {} does not exist",
            quiz_id
        )));
    };

    let names = normalize_team_names(&request.team_names);
    if names.is_empty() {
        return Err(ServerError::Validation(
            "At least one team member name is required".into(),
        ));
    }

    let mut tx = pool.begin().await?;
    let players = db::player::upsert_players_by_name(&mut *tx, user_id.0, &names).await?;
    let player_ids: Vec<Uuid> = players.iter().map(|p| p.id).collect();
    db::player::replace_quiz_players(&mut *tx, quiz.id, &player_ids).await?;
    tx.commit().await?;

    Ok(Json(players))
}
