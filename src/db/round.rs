use sqlx::{PgConnection, PgExecutor};
use uuid::Uuid;

use crate::models::{
    error::ServerError,
    round::{Round, RoundDraft, UpdateRoundRequest},
};

pub async fn insert_rounds(
    conn: &mut PgConnection,
    quiz_id: Uuid,
    drafts: &[RoundDraft],
) -> Result<Vec<Round>, sqlx::Error> {
    let mut rounds = Vec::with_capacity(drafts.len());

    for draft in drafts {
        let round = sqlx::query_as::<_, Round>(
            r#"
            INSERT INTO "round" (quiz_id, round_number, round_name, max_score)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(quiz_id)
        .bind(draft.round_number)
        .bind(&draft.round_name)
        .bind(draft.max_score)
        .fetch_one(&mut *conn)
        .await?;

        rounds.push(round);
    }

    Ok(rounds)
}

pub async fn list_rounds(
    executor: impl PgExecutor<'_>,
    quiz_id: Uuid,
) -> Result<Vec<Round>, sqlx::Error> {
    sqlx::query_as::<_, Round>(
        r#"
        SELECT * FROM "round"
        WHERE quiz_id = $1
        ORDER BY round_number ASC
        "#,
    )
    .bind(quiz_id)
    .fetch_all(executor)
    .await
}

/// Fetches a round, scoped through its quiz to the owning user.
pub async fn get_round_for_user(
    executor: impl PgExecutor<'_>,
    round_id: Uuid,
    user_id: Uuid,
) -> Result<Option<Round>, sqlx::Error> {
    sqlx::query_as::<_, Round>(
        r#"
        SELECT r.* FROM "round" r
        JOIN "quiz" q ON q.id = r.quiz_id
        WHERE r.id = $1 AND q.user_id = $2
        "#,
    )
    .bind(round_id)
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Overwrites the round aggregate after a question save.
pub async fn update_round_totals(
    executor: impl PgExecutor<'_>,
    round_id: Uuid,
    score: i32,
    max_score: Option<i32>,
    notes: Option<&str>,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        UPDATE "round"
        SET score = $2, max_score = $3, notes = $4
        WHERE id = $1
        "#,
    )
    .bind(round_id)
    .bind(score)
    .bind(max_score)
    .bind(notes)
    .execute(executor)
    .await?;

    Ok(())
}

pub async fn update_round_meta(
    executor: impl PgExecutor<'_>,
    round_id: Uuid,
    user_id: Uuid,
    update: &UpdateRoundRequest,
) -> Result<Round, ServerError> {
    let round = sqlx::query_as::<_, Round>(
        r#"
        UPDATE "round" r
        SET round_name = COALESCE($3, r.round_name),
            highest_unique = COALESCE($4, r.highest_unique)
        FROM "quiz" q
        WHERE r.id = $1 AND q.id = r.quiz_id AND q.user_id = $2
        RETURNING r.*
        "#,
    )
    .bind(round_id)
    .bind(user_id)
    .bind(update.round_name.as_deref())
    .bind(update.highest_unique)
    .fetch_optional(executor)
    .await?;

    round.ok_or_else(|| ServerError::NotFound(format!("Round with id {} does not exist", round_id)))
}
