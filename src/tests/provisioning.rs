#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sqlx::PgPool;
    use uuid::Uuid;

    use crate::{
        db::player::upsert_players_by_name,
        models::{
            format::FormatRound,
            quiz::{CreateQuizOutcome, CreateQuizRequest},
        },
        service::provisioning::{create_quiz_from_format, normalize_team_names},
    };

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn chelsea_request(quiz_date: NaiveDate, roster: &[&str]) -> CreateQuizRequest {
        CreateQuizRequest {
            format_slug: "chelsea".into(),
            quiz_date,
            is_big_quiz: false,
            team_names: names(roster),
            teams_total: None,
            position: None,
            notes: None,
        }
    }

    #[test]
    fn normalization_trims_and_drops_empties() {
        let result = normalize_team_names(&names(&["  Karl ", "", "   ", "Jess"]));
        assert_eq!(result, vec!["Karl", "Jess"]);
    }

    #[test]
    fn normalization_dedupes_first_occurrence_wins() {
        let result = normalize_team_names(&names(&["Karl", "Jess", " Karl", "Jess "]));
        assert_eq!(result, vec!["Karl", "Jess"]);
    }

    #[test]
    fn normalization_is_case_sensitive() {
        let result = normalize_team_names(&names(&["Karl", "karl"]));
        assert_eq!(result, vec!["Karl", "karl"]);
    }

    #[test]
    fn all_blank_roster_normalizes_to_empty() {
        let result = normalize_team_names(&names(&["", "   "]));
        assert!(result.is_empty());
    }

    #[test]
    fn format_round_picks_ceiling_by_quiz_size() {
        let round = FormatRound {
            id: Uuid::new_v4(),
            format_id: Uuid::new_v4(),
            round_number: 7,
            round_name: "Facebook".into(),
            default_small_max: Some(8),
            default_big_max: Some(10),
        };

        assert_eq!(round.default_max(false), Some(8));
        assert_eq!(round.default_max(true), Some(10));
    }

    #[sqlx::test]
    async fn same_date_twice_yields_one_created_one_duplicate(pool: PgPool) {
        let user = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();

        let first = create_quiz_from_format(&pool, user, chelsea_request(date, &["Karl", "Jess"]))
            .await
            .unwrap();

        let created = match first {
            CreateQuizOutcome::Created { quiz, rounds, .. } => {
                assert_eq!(rounds.len(), 10);
                quiz
            }
            CreateQuizOutcome::Duplicate { .. } => panic!("first insert reported a duplicate"),
        };

        let second = create_quiz_from_format(&pool, user, chelsea_request(date, &["Karl"]))
            .await
            .unwrap();

        match second {
            CreateQuizOutcome::Duplicate { existing_quiz } => {
                assert_eq!(existing_quiz.id, created.id);
            }
            CreateQuizOutcome::Created { .. } => {
                panic!("second insert on the same date created a quiz");
            }
        }

        let quiz_count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM "quiz" WHERE user_id = $1"#)
                .bind(user)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(quiz_count, 1);
    }

    #[sqlx::test]
    async fn roster_variants_reuse_player_identities(pool: PgPool) {
        let user = Uuid::new_v4();
        let first_date = NaiveDate::from_ymd_opt(2025, 11, 25).unwrap();
        let second_date = NaiveDate::from_ymd_opt(2025, 12, 2).unwrap();

        // Whitespace and repeats collapse to two identities.
        let first =
            create_quiz_from_format(&pool, user, chelsea_request(first_date, &[" Karl ", "Jess", "Karl"]))
                .await
                .unwrap();

        let first_ids = match first {
            CreateQuizOutcome::Created {
                player_ids_by_name, ..
            } => player_ids_by_name,
            CreateQuizOutcome::Duplicate { .. } => panic!("first insert reported a duplicate"),
        };
        assert_eq!(first_ids.len(), 2);

        // A later quiz with the same people maps to the same identities.
        let second =
            create_quiz_from_format(&pool, user, chelsea_request(second_date, &["Jess ", "Karl"]))
                .await
                .unwrap();

        let second_ids = match second {
            CreateQuizOutcome::Created {
                player_ids_by_name, ..
            } => player_ids_by_name,
            CreateQuizOutcome::Duplicate { .. } => panic!("second insert reported a duplicate"),
        };
        assert_eq!(first_ids, second_ids);

        let player_count: i64 =
            sqlx::query_scalar(r#"SELECT COUNT(*) FROM "player" WHERE user_id = $1"#)
                .bind(user)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(player_count, 2);
    }

    #[sqlx::test]
    async fn repeated_upsert_returns_existing_ids(pool: PgPool) {
        let user = Uuid::new_v4();
        let roster = names(&["Karl", "Jess"]);

        let mut conn = pool.acquire().await.unwrap();

        let first = upsert_players_by_name(&mut conn, user, &roster).await.unwrap();
        let second = upsert_players_by_name(&mut conn, user, &roster).await.unwrap();

        let first_ids: Vec<Uuid> = first.iter().map(|p| p.id).collect();
        let second_ids: Vec<Uuid> = second.iter().map(|p| p.id).collect();
        assert_eq!(first_ids, second_ids);
    }
}
