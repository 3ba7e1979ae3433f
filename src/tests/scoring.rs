#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{
        models::{
            question::{QuestionEntry, QuestionType, RoundTotals},
            round::Round,
        },
        service::scoring::{
            RoundKind, classify_round, compute_round_totals, filter_and_renumber,
            validate_joker_selection,
        },
    };

    fn question(number: i32, correct: bool) -> QuestionEntry {
        QuestionEntry {
            question_number: number,
            question_text: Some(format!("Question {}", number)),
            our_answer: Some("answer".into()),
            is_correct: Some(correct),
            question_type: QuestionType::Normal,
            points_value: Some(1),
            points_scored: None,
        }
    }

    fn correct_questions(count: i32) -> Vec<QuestionEntry> {
        (1..=count).map(|n| question(n, true)).collect()
    }

    #[test]
    fn facebook_small_quiz_doubles_first_five() {
        let questions = correct_questions(8);

        let totals = compute_round_totals(&questions, Some(7), false, 7, Some("Facebook"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 13,
                max_score: 13
            }
        );
    }

    #[test]
    fn facebook_big_quiz_doubles_first_eight() {
        let questions = correct_questions(10);

        let totals = compute_round_totals(&questions, Some(7), true, 7, Some("Facebook"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 18,
                max_score: 18
            }
        );
    }

    #[test]
    fn standard_round_joker_doubles_everything() {
        let mut questions = correct_questions(3);
        questions.push(question(4, false));
        questions.push(question(5, false));

        let totals = compute_round_totals(&questions, Some(3), false, 3, Some("Geography"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 6,
                max_score: 10
            }
        );
    }

    #[test]
    fn no_joker_keeps_base_totals() {
        let mut questions = correct_questions(3);
        questions.push(question(4, false));
        questions.push(question(5, false));

        let totals = compute_round_totals(&questions, Some(9), false, 3, Some("Geography"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 3,
                max_score: 5
            }
        );
    }

    #[test]
    fn pictures_round_never_takes_the_joker() {
        let questions = correct_questions(10);

        // Joker selected on the pictures round itself; the guard must hold.
        let totals = compute_round_totals(&questions, Some(8), false, 8, Some("Pictures"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 10,
                max_score: 10
            }
        );
    }

    #[test]
    fn pictures_guard_applies_by_name_alone() {
        let questions = correct_questions(4);

        let totals = compute_round_totals(&questions, Some(3), false, 3, Some("Picture board"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 4,
                max_score: 4
            }
        );
    }

    #[test]
    fn killer_without_explicit_score_counts_max_only() {
        let questions = vec![QuestionEntry {
            question_number: 1,
            question_text: Some("Killer".into()),
            our_answer: Some("guess".into()),
            is_correct: Some(true),
            question_type: QuestionType::Killer,
            points_value: Some(3),
            points_scored: None,
        }];

        let totals = compute_round_totals(&questions, None, false, 2, Some("Entertainment"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 0,
                max_score: 3
            }
        );
    }

    #[test]
    fn explicit_points_scored_overrides_correctness() {
        let questions = vec![QuestionEntry {
            question_number: 1,
            question_text: Some("Wipeout".into()),
            our_answer: Some("partial".into()),
            is_correct: Some(false),
            question_type: QuestionType::Wipeout,
            points_value: Some(5),
            points_scored: Some(2),
        }];

        let totals = compute_round_totals(&questions, None, false, 4, Some("Music"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 2,
                max_score: 5
            }
        );
    }

    #[test]
    fn missing_points_value_defaults_to_one() {
        let questions = vec![QuestionEntry {
            question_number: 1,
            question_text: Some("Plain".into()),
            our_answer: None,
            is_correct: Some(true),
            question_type: QuestionType::Normal,
            points_value: None,
            points_scored: None,
        }];

        let totals = compute_round_totals(&questions, None, false, 1, None);

        assert_eq!(
            totals,
            RoundTotals {
                score: 1,
                max_score: 1
            }
        );
    }

    #[test]
    fn empty_rows_are_dropped_and_survivors_renumbered() {
        let empty = QuestionEntry {
            question_number: 2,
            question_text: Some("   ".into()),
            our_answer: Some("".into()),
            is_correct: None,
            question_type: QuestionType::Normal,
            points_value: None,
            points_scored: None,
        };

        let entries = vec![question(1, true), empty, question(3, false)];
        let filtered = filter_and_renumber(entries);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].question_number, 1);
        assert_eq!(filtered[1].question_number, 2);
        assert_eq!(filtered[1].question_text.as_deref(), Some("Question 3"));
    }

    #[test]
    fn totals_are_deterministic_and_idempotent() {
        let filtered = filter_and_renumber(correct_questions(6));

        let first = compute_round_totals(&filtered, Some(2), true, 2, Some("Entertainment"));
        let second = compute_round_totals(&filtered, Some(2), true, 2, Some("Entertainment"));

        assert_eq!(first, second);

        // Filtering an already filtered list changes nothing.
        let refiltered = filter_and_renumber(filtered.clone());
        let third = compute_round_totals(&refiltered, Some(2), true, 2, Some("Entertainment"));
        assert_eq!(first, third);
    }

    #[test]
    fn classification_matches_name_or_number() {
        assert_eq!(classify_round(7, None), RoundKind::Facebook);
        assert_eq!(classify_round(3, Some("FaceBook special")), RoundKind::Facebook);
        assert_eq!(classify_round(8, None), RoundKind::Pictures);
        assert_eq!(classify_round(2, Some("pictures galore")), RoundKind::Pictures);
        assert_eq!(classify_round(1, Some("General Knowledge 1")), RoundKind::Standard);

        // A mislabelled round 8 still counts as pictures, keeping the guard.
        assert_eq!(classify_round(8, Some("Facebook")), RoundKind::Pictures);
    }

    fn round_row(number: i32, name: &str) -> Round {
        Round {
            id: Uuid::new_v4(),
            quiz_id: Uuid::new_v4(),
            round_number: number,
            round_name: Some(name.into()),
            score: None,
            max_score: None,
            notes: None,
            highest_unique: false,
            inserted_at: Utc::now(),
        }
    }

    #[test]
    fn joker_pick_accepts_eligible_round() {
        let rounds = vec![round_row(1, "General Knowledge 1"), round_row(7, "Facebook")];

        assert!(validate_joker_selection(true, &rounds, 1).is_ok());
        assert!(validate_joker_selection(true, &rounds, 7).is_ok());
    }

    #[test]
    fn joker_pick_rejects_pictures_and_unknown_rounds() {
        let rounds = vec![round_row(1, "General Knowledge 1"), round_row(8, "Pictures")];

        assert!(validate_joker_selection(true, &rounds, 8).is_err());
        assert!(validate_joker_selection(true, &rounds, 11).is_err());
    }

    #[test]
    fn joker_pick_rejected_when_format_has_no_joker() {
        let rounds = vec![round_row(1, "General Knowledge 1")];

        assert!(validate_joker_selection(false, &rounds, 1).is_err());
    }

    #[test]
    fn percentage_guards_division_by_zero() {
        let empty = RoundTotals {
            score: 0,
            max_score: 0,
        };
        assert_eq!(empty.percentage(), None);

        let half = RoundTotals {
            score: 4,
            max_score: 8,
        };
        assert_eq!(half.percentage(), Some(50.0));
    }

    #[test]
    fn joker_on_empty_round_adds_nothing() {
        let totals = compute_round_totals(&[], Some(3), false, 3, Some("Geography"));

        assert_eq!(
            totals,
            RoundTotals {
                score: 0,
                max_score: 0
            }
        );
    }
}
