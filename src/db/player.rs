use sqlx::{PgConnection, PgExecutor};
use uuid::Uuid;

use crate::models::player::Player;

/// Insert-or-fetch players keyed by `(user_id, name)`. A name collision
/// returns the existing row rather than creating a second identity.
pub async fn upsert_players_by_name(
    conn: &mut PgConnection,
    user_id: Uuid,
    names: &[String],
) -> Result<Vec<Player>, sqlx::Error> {
    let mut players = Vec::with_capacity(names.len());

    for name in names {
        let player = sqlx::query_as::<_, Player>(
            r#"
            INSERT INTO "player" (user_id, name)
            VALUES ($1, $2)
            ON CONFLICT (user_id, name) DO UPDATE SET name = EXCLUDED.name
            RETURNING *
            "#,
        )
        .bind(user_id)
        .bind(name)
        .fetch_one(&mut *conn)
        .await?;

        players.push(player);
    }

    Ok(players)
}

pub async fn list_players(
    executor: impl PgExecutor<'_>,
    user_id: Uuid,
) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        SELECT * FROM "player"
        WHERE user_id = $1
        ORDER BY name ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(executor)
    .await
}

pub async fn insert_quiz_players(
    conn: &mut PgConnection,
    quiz_id: Uuid,
    player_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    for player_id in player_ids {
        sqlx::query(
            r#"
            INSERT INTO "quiz_player" (quiz_id, player_id)
            VALUES ($1, $2)
            ON CONFLICT (quiz_id, player_id) DO NOTHING
            "#,
        )
        .bind(quiz_id)
        .bind(player_id)
        .execute(&mut *conn)
        .await?;
    }

    Ok(())
}

/// Roster edits replace the full link set for the quiz.
pub async fn replace_quiz_players(
    conn: &mut PgConnection,
    quiz_id: Uuid,
    player_ids: &[Uuid],
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        DELETE FROM "quiz_player"
        WHERE quiz_id = $1
        "#,
    )
    .bind(quiz_id)
    .execute(&mut *conn)
    .await?;

    insert_quiz_players(conn, quiz_id, player_ids).await
}

pub async fn list_quiz_players(
    executor: impl PgExecutor<'_>,
    quiz_id: Uuid,
) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"
        SELECT p.* FROM "player" p
        JOIN "quiz_player" qp ON qp.player_id = p.id
        WHERE qp.quiz_id = $1
        ORDER BY p.name ASC
        "#,
    )
    .bind(quiz_id)
    .fetch_all(executor)
    .await
}
