use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "question_type", rename_all = "lowercase")]
pub enum QuestionType {
    Normal,
    Killer,
    Wipeout,
}

impl Default for QuestionType {
    fn default() -> Self {
        QuestionType::Normal
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: Uuid,
    pub round_id: Uuid,
    pub question_number: i32,
    pub question_text: Option<String>,
    pub our_answer: Option<String>,
    pub is_correct: Option<bool>,
    pub question_type: QuestionType,
    pub points_value: Option<i32>,
    pub points_scored: Option<i32>,
}

/// A question as submitted by the editor. Carries no row identity: the
/// round's question set is replaced wholesale on every save.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionEntry {
    #[serde(default)]
    pub question_number: i32,
    #[serde(default)]
    pub question_text: Option<String>,
    #[serde(default)]
    pub our_answer: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
    #[serde(default)]
    pub question_type: QuestionType,
    #[serde(default)]
    pub points_value: Option<i32>,
    #[serde(default)]
    pub points_scored: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct SaveQuestionsRequest {
    pub questions: Vec<QuestionEntry>,
    pub notes: Option<String>,
}

/// Achieved and achievable score for one round, joker applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RoundTotals {
    pub score: i32,
    pub max_score: i32,
}

impl RoundTotals {
    /// Score as a fraction of the ceiling. `None` when no ceiling exists,
    /// so display layers never divide by zero.
    pub fn percentage(&self) -> Option<f64> {
        if self.max_score == 0 {
            None
        } else {
            Some(self.score as f64 * 100.0 / self.max_score as f64)
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SaveQuestionsResponse {
    pub totals: RoundTotals,
    /// `None` when the round has no ceiling; the UI shows "no data" instead.
    pub percentage: Option<f64>,
    pub questions: Vec<Question>,
}
