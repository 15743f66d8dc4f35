use crate::error::{Error, Result};
use crate::models::prompt::{PromptVersion, RubricVersion, PURPOSE_EVALUATOR, PURPOSE_INTERVIEWER};
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ResolvedPrompts {
    pub interviewer: PromptVersion,
    pub evaluator: PromptVersion,
}

/// Resolves which prompt and rubric versions a new interview binds to:
/// explicit overrides when the caller supplies them, latest-by-version
/// fallback per purpose otherwise.
#[derive(Clone)]
pub struct PromptService {
    pool: PgPool,
}

impl PromptService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn resolve_prompts(
        &self,
        interviewer_id: Option<Uuid>,
        evaluator_id: Option<Uuid>,
    ) -> Result<ResolvedPrompts> {
        if let (Some(interviewer_id), Some(evaluator_id)) = (interviewer_id, evaluator_id) {
            // Both overrides supplied: fetch exactly those two rows in one query.
            let rows = sqlx::query_as::<_, PromptVersion>(
                r#"SELECT prompt_version_id, purpose, version, content, created_at
                   FROM prompt_versions
                   WHERE prompt_version_id = ANY($1)"#,
            )
            .bind(vec![interviewer_id, evaluator_id])
            .fetch_all(&self.pool)
            .await?;

            let interviewer =
                pick_override(&rows, interviewer_id, PURPOSE_INTERVIEWER)?.clone();
            let evaluator = pick_override(&rows, evaluator_id, PURPOSE_EVALUATOR)?.clone();
            return Ok(ResolvedPrompts {
                interviewer,
                evaluator,
            });
        }

        // At least one role falls back to latest-by-version for its purpose.
        let rows = sqlx::query_as::<_, PromptVersion>(
            r#"SELECT prompt_version_id, purpose, version, content, created_at
               FROM prompt_versions
               ORDER BY version DESC"#,
        )
        .fetch_all(&self.pool)
        .await?;

        let interviewer = resolve_role(&rows, interviewer_id, PURPOSE_INTERVIEWER)?.clone();
        let evaluator = resolve_role(&rows, evaluator_id, PURPOSE_EVALUATOR)?.clone();
        Ok(ResolvedPrompts {
            interviewer,
            evaluator,
        })
    }

    /// The rubric has no override path: always the most recent version.
    pub async fn latest_rubric(&self) -> Result<RubricVersion> {
        let rubric = sqlx::query_as::<_, RubricVersion>(
            r#"SELECT rubric_version_id, version, content, created_at
               FROM rubric_versions
               ORDER BY version DESC
               LIMIT 1"#,
        )
        .fetch_optional(&self.pool)
        .await?;

        rubric.ok_or_else(|| Error::Internal("No rubric version available".to_string()))
    }
}

fn pick_override<'a>(
    rows: &'a [PromptVersion],
    id: Uuid,
    purpose: &str,
) -> Result<&'a PromptVersion> {
    let row = rows
        .iter()
        .find(|p| p.prompt_version_id == id)
        .ok_or_else(|| Error::Internal(format!("Prompt version {} not found", id)))?;
    if row.purpose != purpose {
        return Err(Error::Internal(format!(
            "Prompt version {} has purpose '{}', expected '{}'",
            id, row.purpose, purpose
        )));
    }
    Ok(row)
}

/// Rows must be sorted by version descending; the fallback is the first row
/// whose purpose matches the role.
fn resolve_role<'a>(
    rows: &'a [PromptVersion],
    override_id: Option<Uuid>,
    purpose: &str,
) -> Result<&'a PromptVersion> {
    match override_id {
        Some(id) => pick_override(rows, id, purpose),
        None => rows
            .iter()
            .find(|p| p.purpose == purpose)
            .ok_or_else(|| Error::Internal(format!("No {} prompt version available", purpose))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn version(purpose: &str, version: i32) -> PromptVersion {
        PromptVersion {
            prompt_version_id: Uuid::new_v4(),
            purpose: purpose.into(),
            version,
            content: format!("{}-v{}", purpose, version),
            created_at: None,
        }
    }

    #[test]
    fn falls_back_to_highest_version_per_purpose() {
        // Sorted by version descending, as the query returns them.
        let rows = vec![
            version(PURPOSE_EVALUATOR, 3),
            version(PURPOSE_INTERVIEWER, 2),
            version(PURPOSE_INTERVIEWER, 1),
            version(PURPOSE_EVALUATOR, 1),
        ];

        let interviewer = resolve_role(&rows, None, PURPOSE_INTERVIEWER).unwrap();
        let evaluator = resolve_role(&rows, None, PURPOSE_EVALUATOR).unwrap();
        assert_eq!(interviewer.content, "interviewer-v2");
        assert_eq!(evaluator.content, "evaluator-v3");
    }

    #[test]
    fn explicit_override_wins_over_recency() {
        let old = version(PURPOSE_INTERVIEWER, 1);
        let rows = vec![version(PURPOSE_INTERVIEWER, 5), old.clone()];

        let resolved =
            resolve_role(&rows, Some(old.prompt_version_id), PURPOSE_INTERVIEWER).unwrap();
        assert_eq!(resolved.prompt_version_id, old.prompt_version_id);
        assert_eq!(resolved.version, 1);
    }

    #[test]
    fn override_with_wrong_purpose_is_rejected() {
        let evaluator = version(PURPOSE_EVALUATOR, 1);
        let rows = vec![evaluator.clone()];

        let err = pick_override(&rows, evaluator.prompt_version_id, PURPOSE_INTERVIEWER)
            .unwrap_err();
        assert!(err.to_string().contains("purpose"));
    }

    #[test]
    fn missing_purpose_fails_resolution() {
        let rows = vec![version(PURPOSE_INTERVIEWER, 1)];
        let err = resolve_role(&rows, None, PURPOSE_EVALUATOR).unwrap_err();
        assert!(err.to_string().contains("evaluator"));
    }
}
