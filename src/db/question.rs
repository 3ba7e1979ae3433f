use sqlx::{PgConnection, PgExecutor};
use uuid::Uuid;

use crate::models::question::{Question, QuestionEntry};

pub async fn list_questions(
    executor: impl PgExecutor<'_>,
    round_id: Uuid,
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT * FROM "question"
        WHERE round_id = $1
        ORDER BY question_number ASC
        "#,
    )
    .bind(round_id)
    .fetch_all(executor)
    .await
}

/// Replaces the round's full question set: delete everything, then insert
/// the filtered, renumbered list. Never updates rows in place.
pub async fn replace_questions(
    conn: &mut PgConnection,
    round_id: Uuid,
    entries: &[QuestionEntry],
) -> Result<Vec<Question>, sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM "question"
        WHERE round_id = $1
        "#,
    )
    .bind(round_id)
    .execute(&mut *conn)
    .await?;

    let mut questions = Vec::with_capacity(entries.len());

    for entry in entries {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO "question"
                (round_id, question_number, question_text, our_answer, is_correct, question_type, points_value, points_scored)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(round_id)
        .bind(entry.question_number)
        .bind(entry.question_text.as_deref())
        .bind(entry.our_answer.as_deref())
        .bind(entry.is_correct)
        .bind(entry.question_type)
        .bind(entry.points_value.unwrap_or(1))
        .bind(entry.points_scored)
        .fetch_one(&mut *conn)
        .await?;

        questions.push(question);
    }

    Ok(questions)
}
