use crate::error::Result;
use crate::models::outbox::LoginLinkOutboxEntry;
use reqwest::Client;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

/// Outbox-pattern enqueuer for candidate login-link emails. The row is
/// written inside the scheduling transaction; a separate batch sender
/// provisions the user, builds the magic link and delivers the email,
/// retrying up to its own cap and marking the row sent/failed.
#[derive(Clone)]
pub struct NotificationService {
    client: Client,
    trigger_url: Option<String>,
}

impl NotificationService {
    pub fn new(client: Client, trigger_url: Option<String>) -> Self {
        Self {
            client,
            trigger_url,
        }
    }

    pub async fn enqueue_login_link(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        interview_id: Uuid,
        candidate_email: &str,
    ) -> Result<LoginLinkOutboxEntry> {
        let entry = sqlx::query_as::<_, LoginLinkOutboxEntry>(
            r#"
            INSERT INTO login_link_outbox (interview_id, candidate_email, status, tries)
            VALUES ($1, $2, 'pending', 0)
            RETURNING id, interview_id, candidate_email, status, tries, created_at
            "#,
        )
        .bind(interview_id)
        .bind(candidate_email)
        .fetch_one(&mut **tx)
        .await?;
        Ok(entry)
    }

    /// Kicks the batch sender so the pending row is picked up immediately
    /// instead of waiting for its next cycle. Detached: the scheduling call
    /// never observes the outcome.
    pub fn trigger_sender(&self, interview_id: Uuid) {
        let Some(url) = self.trigger_url.clone() else {
            tracing::debug!("No login-link sender configured, outbox row will wait for batch run");
            return;
        };

        let client = self.client.clone();
        tokio::spawn(async move {
            match client.post(&url).json(&serde_json::json!({})).send().await {
                Ok(resp) if resp.status().is_success() => {
                    tracing::info!(%interview_id, "Login-link sender triggered");
                }
                Ok(resp) => {
                    tracing::warn!(
                        %interview_id,
                        status = %resp.status(),
                        "Login-link sender trigger returned an error status"
                    );
                }
                Err(e) => {
                    tracing::warn!(%interview_id, error = %e, "Failed to trigger login-link sender");
                }
            }
        });
    }
}
