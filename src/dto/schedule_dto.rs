use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScheduleInterviewRequest {
    #[validate(required(message = "application_id is required"))]
    pub application_id: Option<Uuid>,
    // Defaulted so an omitted field reaches the validator as an empty list
    // and gets the same 400 as an explicitly empty one.
    #[serde(default)]
    #[validate(length(min = 1, message = "question_ids must not be empty"))]
    pub question_ids: Vec<Uuid>,
    pub resume_path: Option<String>,
    pub interviewer_prompt_version_id: Option<Uuid>,
    pub evaluator_prompt_version_id: Option<Uuid>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScheduleInterviewResponse {
    pub success: bool,
    pub interview_id: Uuid,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn omitted_question_ids_deserializes_and_fails_validation() {
        let req: ScheduleInterviewRequest =
            serde_json::from_value(json!({ "application_id": Uuid::new_v4() }))
                .expect("missing question_ids must not be a deserialization error");
        assert!(req.question_ids.is_empty());

        let errors = req.validate().unwrap_err();
        assert!(errors.to_string().contains("question_ids"));
    }

    #[test]
    fn missing_application_id_fails_validation() {
        let req: ScheduleInterviewRequest =
            serde_json::from_value(json!({ "question_ids": [Uuid::new_v4()] })).unwrap();

        let errors = req.validate().unwrap_err();
        assert!(errors.to_string().contains("application_id"));
    }
}
