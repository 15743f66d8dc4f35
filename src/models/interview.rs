use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Lifecycle: created here as `scheduled`; the bot and evaluator move it to
/// `completed` / `evaluated`, and management UI may cancel it. This workflow
/// never mutates an interview after creation.
pub const STATUS_SCHEDULED: &str = "scheduled";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Interview {
    pub interview_id: Uuid,
    pub application_id: Uuid,
    pub interviewer_prompt_version_id: Uuid,
    pub evaluator_prompt_version_id: Uuid,
    pub rubric_version_id: Uuid,
    pub resume_text_cache: String,
    pub auth_token: String,
    pub status: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// One row per selected question, snapshotting the question text at schedule
/// time. `position` is 1-based in submission order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InterviewQuestion {
    pub interview_id: Uuid,
    pub question_id: Uuid,
    pub position: i32,
    pub question_text: String,
}
