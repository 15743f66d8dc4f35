use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const PURPOSE_INTERVIEWER: &str = "interviewer";
pub const PURPOSE_EVALUATOR: &str = "evaluator";

/// Versioned, purpose-tagged prompt text bound to an interview at creation
/// time. `purpose` is one of `interviewer` / `evaluator`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PromptVersion {
    pub prompt_version_id: Uuid,
    pub purpose: String,
    pub version: i32,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RubricVersion {
    pub rubric_version_id: Uuid,
    pub version: i32,
    pub content: String,
    pub created_at: Option<DateTime<Utc>>,
}
