use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub question_id: Uuid,
    pub text: String,
    /// Free-form category ("Technical", "Behavioral"); the bot payload
    /// derives its lowercase `type` field from this.
    pub category: String,
    pub created_at: Option<DateTime<Utc>>,
}
