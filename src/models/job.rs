use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    pub job_id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}
