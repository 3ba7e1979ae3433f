use sqlx::{Pool, Postgres};
use tracing::debug;
use uuid::Uuid;

use crate::{
    db::{question::replace_questions, quiz::get_quiz_by_id, round},
    models::{
        error::ServerError,
        question::{
            QuestionEntry, QuestionType, RoundTotals, SaveQuestionsRequest, SaveQuestionsResponse,
        },
        round::Round,
    },
};

/// Round classification for the joker rules. The name heuristic mirrors the
/// long-standing convention that round 7 is "Facebook" and round 8 is
/// "Pictures"; the number fallback keeps unnamed rounds behaving the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    Standard,
    Facebook,
    Pictures,
}

const FACEBOOK_ROUND_NUMBER: i32 = 7;
const PICTURES_ROUND_NUMBER: i32 = 8;

pub fn classify_round(round_number: i32, round_name: Option<&str>) -> RoundKind {
    let name = round_name.unwrap_or("").to_lowercase();

    // Pictures wins over Facebook so the joker guard below holds even for
    // oddly named rounds.
    if name.contains("picture") || round_number == PICTURES_ROUND_NUMBER {
        RoundKind::Pictures
    } else if name.contains("facebook") || round_number == FACEBOOK_ROUND_NUMBER {
        RoundKind::Facebook
    } else {
        RoundKind::Standard
    }
}

/// Checks a joker pick against the quiz's rounds: the format must use a
/// joker, the round must exist, and Pictures rounds are never eligible.
pub fn validate_joker_selection(
    format_has_joker: bool,
    rounds: &[Round],
    joker_round_number: i32,
) -> Result<(), ServerError> {
    if !format_has_joker {
        return Err(ServerError::Validation(
            "This quiz format does not use a joker".into(),
        ));
    }

    let Some(round) = rounds
        .iter()
        .find(|r| r.round_number == joker_round_number)
    else {
        return Err(ServerError::Validation(format!(
            "Quiz has no round {}",
            joker_round_number
        )));
    };

    if classify_round(round.round_number, round.round_name.as_deref()) == RoundKind::Pictures {
        return Err(ServerError::Validation(
            "The joker cannot be played on a Pictures round".into(),
        ));
    }

    Ok(())
}

/// In a Facebook round only the leading block of questions doubles under the
/// joker; the block is longer on big quizzes.
fn facebook_joker_limit(is_big_quiz: bool) -> i32 {
    if is_big_quiz { 8 } else { 5 }
}

fn has_content(entry: &QuestionEntry) -> bool {
    entry
        .question_text
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty())
        || entry
            .our_answer
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty())
        || entry.points_value.is_some()
        || entry.points_scored.is_some()
        || entry.is_correct.is_some()
}

/// Drops empty rows and renumbers the survivors 1..N in their current order,
/// closing gaps left by deleted rows. Incoming question numbers are not
/// trusted for ordering.
pub fn filter_and_renumber(entries: Vec<QuestionEntry>) -> Vec<QuestionEntry> {
    entries
        .into_iter()
        .filter(has_content)
        .enumerate()
        .map(|(idx, mut entry)| {
            entry.question_number = idx as i32 + 1;
            entry
        })
        .collect()
}

/// A question's `(max, scored)` contribution before any joker bonus.
/// An explicit `points_scored` always wins; auto-derivation from the
/// correctness flag applies to `normal` questions only.
fn base_contribution(entry: &QuestionEntry) -> (i32, i32) {
    let max = entry.points_value.unwrap_or(1);

    let scored = match entry.points_scored {
        Some(points) => points,
        None if entry.question_type == QuestionType::Normal && entry.is_correct == Some(true) => {
            max
        }
        None => 0,
    };

    (max, scored)
}

/// Computes a round's achieved and achievable totals over an already
/// filtered and renumbered question list. Pure; all I/O belongs to the
/// caller.
pub fn compute_round_totals(
    entries: &[QuestionEntry],
    joker_round_number: Option<i32>,
    is_big_quiz: bool,
    round_number: i32,
    round_name: Option<&str>,
) -> RoundTotals {
    let mut base_max = 0;
    let mut base_score = 0;

    for entry in entries {
        let (max, scored) = base_contribution(entry);
        base_max += max;
        base_score += scored;
    }

    let kind = classify_round(round_number, round_name);
    let is_joker = joker_round_number == Some(round_number);

    // Pictures rounds never take the joker, even when selected upstream.
    if !is_joker || kind == RoundKind::Pictures || entries.is_empty() {
        return RoundTotals {
            score: base_score,
            max_score: base_max,
        };
    }

    let limit = facebook_joker_limit(is_big_quiz);
    let mut bonus_max = 0;
    let mut bonus_score = 0;

    for entry in entries {
        let doubled = match kind {
            RoundKind::Facebook => entry.question_number <= limit,
            _ => true,
        };

        if doubled {
            let (max, scored) = base_contribution(entry);
            bonus_max += max;
            bonus_score += scored;
        }
    }

    RoundTotals {
        score: base_score + bonus_score,
        max_score: base_max + bonus_max,
    }
}

/// Saves a round's question set: filter, renumber, compute totals, then
/// replace the stored set and overwrite the round aggregate in one
/// transaction.
pub async fn save_round_questions(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    round_id: Uuid,
    request: SaveQuestionsRequest,
) -> Result<SaveQuestionsResponse, ServerError> {
    let Some(current) = round::get_round_for_user(pool, round_id, user_id).await? else {
        return Err(ServerError::NotFound(format!(
            "Round with id {} does not exist",
            round_id
        )));
    };

    let quiz = get_quiz_by_id(pool, user_id, current.quiz_id)
        .await?
        .ok_or_else(|| {
            ServerError::NotFound(format!("Quiz with id {} does not exist", current.quiz_id))
        })?;

    let entries = filter_and_renumber(request.questions);
    let totals = compute_round_totals(
        &entries,
        quiz.joker_round_number,
        quiz.is_big_quiz,
        current.round_number,
        current.round_name.as_deref(),
    );

    debug!(
        "Round {} totals: {}/{} over {} questions",
        current.round_number,
        totals.score,
        totals.max_score,
        entries.len()
    );

    // An all-empty save keeps the previously set ceiling instead of erasing it.
    let max_score = if totals.max_score == 0 {
        current.max_score
    } else {
        Some(totals.max_score)
    };

    let notes = request
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty());

    let mut tx = pool.begin().await?;
    let questions = replace_questions(&mut *tx, round_id, &entries).await?;
    round::update_round_totals(&mut *tx, round_id, totals.score, max_score, notes).await?;
    tx.commit().await?;

    Ok(SaveQuestionsResponse {
        totals,
        percentage: totals.percentage(),
        questions,
    })
}
