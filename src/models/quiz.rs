use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::{
    api::validation::validate_team_names,
    models::{player::Player, round::Round},
};

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quiz {
    pub id: Uuid,
    pub user_id: Uuid,
    pub format_id: Option<Uuid>,
    pub quiz_date: NaiveDate,
    pub quiz_name: String,
    pub is_big_quiz: bool,
    pub joker_round_number: Option<i32>,
    pub teams_total: Option<i32>,
    pub position: Option<i32>,
    pub notes: Option<String>,
    pub first_team_name: Option<String>,
    pub first_team_score: Option<i32>,
    pub first_team_is_us: Option<bool>,
    pub second_team_name: Option<String>,
    pub second_team_score: Option<i32>,
    pub second_team_is_us: Option<bool>,
    pub third_team_name: Option<String>,
    pub third_team_score: Option<i32>,
    pub third_team_is_us: Option<bool>,
    pub inserted_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuizRequest {
    #[validate(length(min = 1, message = "Quiz format must be selected"))]
    pub format_slug: String,
    pub quiz_date: NaiveDate,
    #[serde(default)]
    pub is_big_quiz: bool,
    #[validate(
        length(min = 1, message = "At least one team member is required"),
        custom(function = validate_team_names)
    )]
    pub team_names: Vec<String>,
    pub teams_total: Option<i32>,
    pub position: Option<i32>,
    pub notes: Option<String>,
}

/// Fields a quiz editor may overwrite after creation. Sent wholesale,
/// written wholesale.
#[derive(Debug, Deserialize)]
pub struct UpdateQuizRequest {
    pub joker_round_number: Option<i32>,
    pub teams_total: Option<i32>,
    pub position: Option<i32>,
    pub notes: Option<String>,
    pub first_team_name: Option<String>,
    pub first_team_score: Option<i32>,
    pub first_team_is_us: Option<bool>,
    pub second_team_name: Option<String>,
    pub second_team_score: Option<i32>,
    pub second_team_is_us: Option<bool>,
    pub third_team_name: Option<String>,
    pub third_team_score: Option<i32>,
    pub third_team_is_us: Option<bool>,
}

/// A quiz with its rounds and roster, as the detail view consumes it.
#[derive(Debug, Serialize)]
pub struct QuizDetail {
    pub quiz: Quiz,
    pub rounds: Vec<Round>,
    pub players: Vec<Player>,
}

/// Outcome of quiz provisioning. A date collision is a distinguished
/// success, not an error, so the caller can navigate to the existing quiz.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CreateQuizOutcome {
    Created {
        quiz: Quiz,
        rounds: Vec<Round>,
        players: Vec<Player>,
        player_ids_by_name: HashMap<String, Uuid>,
    },
    Duplicate {
        existing_quiz: Quiz,
    },
}
