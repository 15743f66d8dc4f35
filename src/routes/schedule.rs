use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::dto::schedule_dto::{ScheduleInterviewRequest, ScheduleInterviewResponse};
use crate::{error::Result, AppState};

pub async fn schedule_interview(
    State(state): State<AppState>,
    Json(req): Json<ScheduleInterviewRequest>,
) -> Result<impl IntoResponse> {
    req.validate()?;

    let interview_id = state.scheduling_service.schedule(req).await?;

    Ok(Json(ScheduleInterviewResponse {
        success: true,
        interview_id,
        message: "Interview scheduled successfully".to_string(),
    }))
}

/// Read-back for the external bot launcher: fetch the queued interview
/// context by its single-use auth token.
pub async fn get_queue_entry(
    State(state): State<AppState>,
    Path(auth_token): Path<String>,
) -> Result<impl IntoResponse> {
    let entry = state
        .scheduling_service
        .queue_entry_by_token(&auth_token)
        .await?;
    Ok(Json(entry))
}
