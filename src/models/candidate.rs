use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Candidate {
    pub candidate_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}
