use chrono::NaiveDate;
use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::{
    error::ServerError,
    quiz::{Quiz, UpdateQuizRequest},
};

pub struct NewQuiz<'a> {
    pub format_id: Uuid,
    pub quiz_date: NaiveDate,
    pub quiz_name: &'a str,
    pub is_big_quiz: bool,
    pub teams_total: Option<i32>,
    pub position: Option<i32>,
    pub notes: Option<&'a str>,
}

/// Inserts a quiz row. A `(user_id, quiz_date)` unique violation is returned
/// as the raw sqlx error so the provisioning service can turn it into a
/// duplicate outcome instead of a failure.
pub async fn insert_quiz(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
    new_quiz: &NewQuiz<'_>,
) -> Result<Quiz, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        INSERT INTO "quiz" (user_id, format_id, quiz_date, quiz_name, is_big_quiz, teams_total, position, notes)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(new_quiz.format_id)
    .bind(new_quiz.quiz_date)
    .bind(new_quiz.quiz_name)
    .bind(new_quiz.is_big_quiz)
    .bind(new_quiz.teams_total)
    .bind(new_quiz.position)
    .bind(new_quiz.notes)
    .fetch_one(executor)
    .await
}

pub async fn find_quiz_by_date(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
    quiz_date: NaiveDate,
) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT * FROM "quiz"
        WHERE user_id = $1 AND quiz_date = $2
        "#,
    )
    .bind(user_id)
    .bind(quiz_date)
    .fetch_optional(executor)
    .await
}

pub async fn get_quiz_by_id(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
    quiz_id: Uuid,
) -> Result<Option<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT * FROM "quiz"
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(quiz_id)
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_quizzes(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
) -> Result<Vec<Quiz>, sqlx::Error> {
    sqlx::query_as::<_, Quiz>(
        r#"
        SELECT * FROM "quiz"
        WHERE user_id = $1
        ORDER BY quiz_date DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

/// Overwrites the editable quiz fields wholesale, matching how the editor
/// submits them.
pub async fn update_quiz(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
    quiz_id: Uuid,
    update: &UpdateQuizRequest,
) -> Result<Quiz, ServerError> {
    let quiz = sqlx::query_as::<_, Quiz>(
        r#"
        UPDATE "quiz"
        SET joker_round_number = $3,
            teams_total = $4,
            position = $5,
            notes = $6,
            first_team_name = $7,
            first_team_score = $8,
            first_team_is_us = $9,
            second_team_name = $10,
            second_team_score = $11,
            second_team_is_us = $12,
            third_team_name = $13,
            third_team_score = $14,
            third_team_is_us = $15
        WHERE id = $1 AND user_id = $2
        RETURNING *
        "#,
    )
    .bind(quiz_id)
    .bind(user_id)
    .bind(update.joker_round_number)
    .bind(update.teams_total)
    .bind(update.position)
    .bind(update.notes.as_deref())
    .bind(update.first_team_name.as_deref())
    .bind(update.first_team_score)
    .bind(update.first_team_is_us)
    .bind(update.second_team_name.as_deref())
    .bind(update.second_team_score)
    .bind(update.second_team_is_us)
    .bind(update.third_team_name.as_deref())
    .bind(update.third_team_score)
    .bind(update.third_team_is_us)
    .fetch_optional(executor)
    .await?;

    quiz.ok_or_else(|| ServerError::NotFound(format!("Quiz with id {} does not exist", quiz_id)))
}

pub async fn delete_quiz(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
    quiz_id: Uuid,
) -> Result<(), ServerError> {
    let row = sqlx::query(
        r#"
        DELETE FROM "quiz"
        WHERE id = $1 AND user_id = $2
        "#,
    )
    .bind(quiz_id)
    .bind(user_id)
    .execute(executor)
    .await?;

    if row.rows_affected() == 0 {
        return Err(ServerError::NotFound(format!(
            "Quiz with id {} does not exist",
            quiz_id
        )));
    }

    Ok(())
}
