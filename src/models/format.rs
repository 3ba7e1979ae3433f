use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named quiz template. Read-only to the provisioning core; managed elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct QuizFormat {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub has_joker: bool,
    pub supports_big_quiz: bool,
}

/// One round template within a format. Round numbers are unique and
/// contiguous from 1 within a format.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct FormatRound {
    pub id: Uuid,
    pub format_id: Uuid,
    pub round_number: i32,
    pub round_name: String,
    pub default_small_max: Option<i32>,
    pub default_big_max: Option<i32>,
}

impl FormatRound {
    /// Default score ceiling for a quiz of the given size.
    pub fn default_max(&self, is_big_quiz: bool) -> Option<i32> {
        if is_big_quiz {
            self.default_big_max
        } else {
            self.default_small_max
        }
    }
}
