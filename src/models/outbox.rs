use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Pending login-link notification. A separate batch sender owns the rest of
/// the lifecycle: it provisions the portal user, generates the magic link,
/// sends the email, bumps `tries` (cap 5) and moves `status` to
/// `sent`/`failed`. This workflow only ever inserts `pending` rows with
/// `tries` 0.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LoginLinkOutboxEntry {
    pub id: Uuid,
    pub interview_id: Uuid,
    pub candidate_email: String,
    pub status: String,
    pub tries: i32,
    pub created_at: Option<DateTime<Utc>>,
}
