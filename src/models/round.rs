use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Round {
    pub id: Uuid,
    pub quiz_id: Uuid,
    pub round_number: i32,
    pub round_name: Option<String>,
    pub score: Option<i32>,
    pub max_score: Option<i32>,
    pub notes: Option<String>,
    pub highest_unique: bool,
    pub inserted_at: DateTime<Utc>,
}

/// Seed for a round created at provisioning time, before any questions exist.
#[derive(Debug, Clone)]
pub struct RoundDraft {
    pub round_number: i32,
    pub round_name: String,
    pub max_score: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoundRequest {
    pub round_name: Option<String>,
    pub highest_unique: Option<bool>,
}
