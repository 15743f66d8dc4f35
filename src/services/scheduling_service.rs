use crate::dto::payload::InterviewerPayload;
use crate::dto::schedule_dto::ScheduleInterviewRequest;
use crate::error::{is_unique_violation, Error, Result};
use crate::models::application::Application;
use crate::models::candidate::Candidate;
use crate::models::interview::Interview;
use crate::models::job::Job;
use crate::models::question::Question;
use crate::services::notification_service::NotificationService;
use crate::services::prompt_service::PromptService;
use crate::services::resume_service::ResumeService;
use crate::utils::token::generate_auth_token;
use serde_json::Value as JsonValue;
use sqlx::{PgPool, Postgres, Row, Transaction};
use uuid::Uuid;

/// Orchestrates the whole scheduling workflow: resume retrieval, prompt and
/// rubric resolution, interview + script creation, bot payload handoff and
/// the login-link outbox row.
///
/// All writes run inside a single transaction, so a failure at any step
/// rolls back every row written before it; the only partial effect a caller
/// can ever observe is the fire-and-forget sender trigger, which happens
/// after commit.
#[derive(Clone)]
pub struct SchedulingService {
    pool: PgPool,
    resume_service: ResumeService,
    prompt_service: PromptService,
    notification_service: NotificationService,
    auth_token_length: usize,
}

impl SchedulingService {
    pub fn new(
        pool: PgPool,
        resume_service: ResumeService,
        prompt_service: PromptService,
        notification_service: NotificationService,
        auth_token_length: usize,
    ) -> Self {
        Self {
            pool,
            resume_service,
            prompt_service,
            notification_service,
            auth_token_length,
        }
    }

    pub async fn schedule(&self, req: ScheduleInterviewRequest) -> Result<Uuid> {
        let application_id = req
            .application_id
            .ok_or_else(|| Error::BadRequest("application_id is required".to_string()))?;
        if req.question_ids.is_empty() {
            return Err(Error::BadRequest(
                "question_ids must not be empty".to_string(),
            ));
        }

        // Best-effort: a missing or unreadable resume never aborts scheduling.
        let resume_text = self.resume_service.resolve(req.resume_path.as_deref()).await;

        let prompts = self
            .prompt_service
            .resolve_prompts(
                req.interviewer_prompt_version_id,
                req.evaluator_prompt_version_id,
            )
            .await?;
        let rubric = self.prompt_service.latest_rubric().await?;

        let mut tx = self.pool.begin().await?;

        let auth_token = generate_auth_token(self.auth_token_length);
        let interview = sqlx::query_as::<_, Interview>(
            r#"
            INSERT INTO interviews (
                application_id, interviewer_prompt_version_id, evaluator_prompt_version_id,
                rubric_version_id, resume_text_cache, auth_token, status
            ) VALUES ($1, $2, $3, $4, $5, $6, 'scheduled')
            RETURNING interview_id, application_id, interviewer_prompt_version_id,
                      evaluator_prompt_version_id, rubric_version_id, resume_text_cache,
                      auth_token, status, created_at
            "#,
        )
        .bind(application_id)
        .bind(prompts.interviewer.prompt_version_id)
        .bind(prompts.evaluator.prompt_version_id)
        .bind(rubric.rubric_version_id)
        .bind(&resume_text)
        .bind(&auth_token)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                Error::AlreadyScheduled(application_id)
            } else {
                e.into()
            }
        })?;

        let (candidate, job) = self.fetch_relations(&mut tx, application_id).await?;
        let questions = self
            .fetch_questions_in_order(&mut tx, &req.question_ids)
            .await?;

        for (index, question) in questions.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO interview_questions (interview_id, question_id, position, question_text)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(interview.interview_id)
            .bind(question.question_id)
            .bind((index + 1) as i32)
            .bind(&question.text)
            .execute(&mut *tx)
            .await?;
        }

        let payload = InterviewerPayload::assemble(
            &candidate,
            &job,
            &questions,
            &prompts.interviewer.content,
            &resume_text,
        );
        sqlx::query(
            r#"
            INSERT INTO interviewer_queue (interview_id, auth_token, payload)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(interview.interview_id)
        .bind(&auth_token)
        .bind(serde_json::to_value(&payload)?)
        .execute(&mut *tx)
        .await?;

        self.notification_service
            .enqueue_login_link(&mut tx, interview.interview_id, &candidate.email)
            .await?;

        tx.commit().await?;

        self.notification_service.trigger_sender(interview.interview_id);

        tracing::info!(
            interview_id = %interview.interview_id,
            %application_id,
            questions = questions.len(),
            "Interview scheduled"
        );
        Ok(interview.interview_id)
    }

    /// Read endpoint for the bot launcher: the queue entry keyed by the
    /// opaque auth token handed out at schedule time.
    pub async fn queue_entry_by_token(&self, auth_token: &str) -> Result<JsonValue> {
        let row = sqlx::query(
            r#"SELECT interview_id, auth_token, payload, created_at
               FROM interviewer_queue
               WHERE auth_token = $1"#,
        )
        .bind(auth_token)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Interview not found for token".to_string()))?;

        Ok(serde_json::json!({
            "interview_id": row.try_get::<Uuid, _>("interview_id")?,
            "auth_token": row.try_get::<String, _>("auth_token")?,
            "payload": row.try_get::<JsonValue, _>("payload")?,
            "created_at": row.try_get::<chrono::DateTime<chrono::Utc>, _>("created_at")?,
        }))
    }

    /// An application whose candidate or job row has been deleted is treated
    /// as a data-integrity failure naming the application, distinct from a
    /// generic lookup error.
    async fn fetch_relations(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        application_id: Uuid,
    ) -> Result<(Candidate, Job)> {
        let application = sqlx::query_as::<_, Application>(
            r#"SELECT application_id, candidate_id, job_id, created_at
               FROM applications WHERE application_id = $1"#,
        )
        .bind(application_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Application {} not found", application_id)))?;

        let candidate = sqlx::query_as::<_, Candidate>(
            r#"SELECT candidate_id, first_name, last_name, email, created_at
               FROM candidates WHERE candidate_id = $1"#,
        )
        .bind(application.candidate_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or(Error::OrphanedApplication(application_id))?;

        let job = sqlx::query_as::<_, Job>(
            r#"SELECT job_id, title, description, created_at
               FROM jobs WHERE job_id = $1"#,
        )
        .bind(application.job_id)
        .fetch_optional(&mut **tx)
        .await?
        .ok_or(Error::OrphanedApplication(application_id))?;

        Ok((candidate, job))
    }

    /// Fetches the submitted questions and reorders them to submission
    /// order; `ANY($1)` gives no ordering guarantee.
    async fn fetch_questions_in_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        question_ids: &[Uuid],
    ) -> Result<Vec<Question>> {
        let rows = sqlx::query_as::<_, Question>(
            r#"SELECT question_id, text, category, created_at
               FROM questions WHERE question_id = ANY($1)"#,
        )
        .bind(question_ids)
        .fetch_all(&mut **tx)
        .await?;

        let mut ordered = Vec::with_capacity(question_ids.len());
        for id in question_ids {
            let question = rows
                .iter()
                .find(|q| q.question_id == *id)
                .ok_or_else(|| Error::Internal(format!("Question {} not found", id)))?;
            ordered.push(question.clone());
        }
        Ok(ordered)
    }
}
