use sqlx::{Pool, Postgres};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    db::{
        format::{find_format_by_slug, list_format_rounds},
        player::{insert_quiz_players, upsert_players_by_name},
        quiz::{NewQuiz, find_quiz_by_date, insert_quiz},
        round::insert_rounds,
    },
    models::{
        error::ServerError,
        quiz::{CreateQuizOutcome, CreateQuizRequest},
        round::RoundDraft,
    },
};

/// Trim, drop empties, dedupe case-sensitively, first occurrence wins.
pub fn normalize_team_names(names: &[String]) -> Vec<String> {
    let mut seen = Vec::new();

    for name in names {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            continue;
        }
        if !seen.iter().any(|s| s == trimmed) {
            seen.push(trimmed.to_string());
        }
    }

    seen
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    matches!(error, sqlx::Error::Database(db) if db.is_unique_violation())
}

/// Creates a quiz instance from a format template: quiz row, player
/// identities, roster links and one round per format round, all in a single
/// transaction. A date collision rolls back and surfaces the existing quiz
/// as a duplicate outcome rather than an error.
pub async fn create_quiz_from_format(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    request: CreateQuizRequest,
) -> Result<CreateQuizOutcome, ServerError> {
    let names = normalize_team_names(&request.team_names);
    if names.is_empty() {
        return Err(ServerError::Validation(
            "At least one team member name is required".into(),
        ));
    }

    let format = find_format_by_slug(pool, &request.format_slug)
        .await?
        .ok_or_else(|| {
            ServerError::NotFound(format!(
                "Quiz format '{}' does not exist",
                request.format_slug
            ))
        })?;

    if request.is_big_quiz && !format.supports_big_quiz {
        return Err(ServerError::Validation(format!(
            "Format '{}' does not support big quizzes",
            format.slug
        )));
    }

    // Incomplete format setup is reported before anything is written.
    let format_rounds = list_format_rounds(pool, format.id).await?;
    if format_rounds.is_empty() {
        return Err(ServerError::Configuration(format!(
            "Format '{}' has no rounds defined",
            format.slug
        )));
    }

    let mut tx = pool.begin().await?;

    let new_quiz = NewQuiz {
        format_id: format.id,
        quiz_date: request.quiz_date,
        quiz_name: &format.name,
        is_big_quiz: request.is_big_quiz,
        teams_total: request.teams_total,
        position: request.position,
        notes: request.notes.as_deref(),
    };

    let quiz = match insert_quiz(&mut *tx, user_id, &new_quiz).await {
        Ok(quiz) => quiz,
        Err(e) if is_unique_violation(&e) => {
            drop(tx);
            warn!("Quiz already exists on {}", request.quiz_date);

            let existing = find_quiz_by_date(pool, user_id, request.quiz_date)
                .await?
                .ok_or_else(|| {
                    ServerError::Internal(
                        "A quiz already exists on this date, but it could not be loaded".into(),
                    )
                })?;

            return Ok(CreateQuizOutcome::Duplicate {
                existing_quiz: existing,
            });
        }
        Err(e) => return Err(e.into()),
    };

    let players = upsert_players_by_name(&mut *tx, user_id, &names).await?;
    let player_ids: Vec<Uuid> = players.iter().map(|p| p.id).collect();
    insert_quiz_players(&mut *tx, quiz.id, &player_ids).await?;

    let drafts: Vec<RoundDraft> = format_rounds
        .iter()
        .map(|fr| RoundDraft {
            round_number: fr.round_number,
            round_name: fr.round_name.clone(),
            max_score: fr.default_max(request.is_big_quiz),
        })
        .collect();

    let rounds = insert_rounds(&mut *tx, quiz.id, &drafts).await?;

    tx.commit().await?;

    info!(
        "Created quiz {} from format '{}' with {} rounds and {} players",
        quiz.id,
        format.slug,
        rounds.len(),
        players.len()
    );

    let player_ids_by_name = players.iter().map(|p| (p.name.clone(), p.id)).collect();

    Ok(CreateQuizOutcome::Created {
        quiz,
        rounds,
        players,
        player_ids_by_name,
    })
}
