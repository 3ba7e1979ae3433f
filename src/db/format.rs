use sqlx::PgExecutor;
use uuid::Uuid;

use crate::models::format::{FormatRound, QuizFormat};

pub async fn find_format_by_slug(
    executor: impl PgExecutor<'_>,
    slug: &str,
) -> Result<Option<QuizFormat>, sqlx::Error> {
    sqlx::query_as::<_, QuizFormat>(
        r#"
        SELECT id, slug, name, has_joker, supports_big_quiz
        FROM "quiz_format"
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(executor)
    .await
}

pub async fn get_format_by_id(
    executor: impl PgExecutor<'_>,
    format_id: Uuid,
) -> Result<Option<QuizFormat>, sqlx::Error> {
    sqlx::query_as::<_, QuizFormat>(
        r#"
        SELECT id, slug, name, has_joker, supports_big_quiz
        FROM "quiz_format"
        WHERE id = $1
        "#,
    )
    .bind(format_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_formats(executor: impl PgExecutor<'_>) -> Result<Vec<QuizFormat>, sqlx::Error> {
    sqlx::query_as::<_, QuizFormat>(
        r#"
        SELECT id, slug, name, has_joker, supports_big_quiz
        FROM "quiz_format"
        ORDER BY name ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn list_format_rounds(
    executor: impl PgExecutor<'_>,
    format_id: Uuid,
) -> Result<Vec<FormatRound>, sqlx::Error> {
    sqlx::query_as::<_, FormatRound>(
        r#"
        SELECT id, format_id, round_number, round_name, default_small_max, default_big_max
        FROM "quiz_format_round"
        WHERE format_id = $1
        ORDER BY round_number ASC
        "#,
    )
    .bind(format_id)
    .fetch_all(executor)
    .await
}
