use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Pairing of one candidate with one job opening. Pre-existing; the
/// scheduling workflow only ever reads it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Application {
    pub application_id: Uuid,
    pub candidate_id: Uuid,
    pub job_id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
}
