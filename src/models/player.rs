use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::validation::validate_team_names;

/// A participant identity, deduplicated by name within one user account.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub inserted_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ReplaceRosterRequest {
    #[validate(
        length(min = 1, message = "At least one team member is required"),
        custom(function = validate_team_names)
    )]
    pub team_names: Vec<String>,
}
