use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// One stage of a company's interview process as described by a student.
/// Every field is optional; absent fields simply contribute no signal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Round {
    #[serde(rename = "type")]
    pub round_type: Option<String>,
    pub difficulty: Option<String>,
    pub mode: Option<String>,
    pub questions: Option<String>,
    pub resources: Option<String>,
}

/// A student's approved account of one drive, as consumed by the report pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FeedbackEntry {
    pub student_name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    /// Interview order.
    pub rounds: Vec<Round>,
    pub overall_experience: Option<String>,
    /// 0 or absent means unrated.
    pub rating: Option<u8>,
    pub tips_for_juniors: Option<String>,
}

impl FeedbackEntry {
    /// Returns the rating only when it lies on the 1–5 scale.
    pub fn effective_rating(&self) -> Option<u8> {
        self.rating.filter(|r| (1..=5).contains(r))
    }
}

/// Returns the trimmed text of an optional field, or `None` when it is absent or blank.
pub fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Row shape of the `feedback` table.
#[allow(dead_code)]
#[derive(Debug, Clone, FromRow)]
pub struct FeedbackRow {
    pub id: Uuid,
    pub company_name: String,
    pub student_name: Option<String>,
    pub roll_number: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub rounds: Json<Vec<Round>>,
    pub overall_experience: Option<String>,
    pub rating: Option<i16>,
    pub tips_for_juniors: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<FeedbackRow> for FeedbackEntry {
    fn from(row: FeedbackRow) -> Self {
        FeedbackEntry {
            student_name: row.student_name,
            roll_number: row.roll_number,
            email: row.email,
            role: row.role,
            rounds: row.rounds.0,
            overall_experience: row.overall_experience,
            rating: row.rating.and_then(|r| u8::try_from(r).ok()),
            tips_for_juniors: row.tips_for_juniors,
        }
    }
}
