//! Denormalized interview context handed to the external interview bot via
//! the `interviewer_queue` table.
//!
//! The field names and nesting are an external contract: the bot reads
//! `candidate`, `job`, `questions`, `interviewer_prompt` and
//! `evaluation_materials` exactly as spelled here, so these structs must not
//! be renamed or restructured without coordinating with the bot launcher.

use crate::models::{candidate::Candidate, job::Job, question::Question};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewerPayload {
    pub candidate: PayloadCandidate,
    pub job: PayloadJob,
    pub questions: Vec<PayloadQuestion>,
    pub interviewer_prompt: String,
    pub evaluation_materials: EvaluationMaterials,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadCandidate {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadJob {
    pub id: Uuid,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayloadQuestion {
    pub id: Uuid,
    pub text: String,
    /// Lowercased question category ("technical", "behavioral").
    #[serde(rename = "type")]
    pub question_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMaterials {
    pub resume_text: String,
    pub job_description: String,
}

impl InterviewerPayload {
    /// Pure assembly, no I/O. Questions must already be in submission order;
    /// the payload preserves that order.
    pub fn assemble(
        candidate: &Candidate,
        job: &Job,
        questions: &[Question],
        interviewer_prompt: &str,
        resume_text: &str,
    ) -> Self {
        Self {
            candidate: PayloadCandidate {
                id: candidate.candidate_id,
                first_name: candidate.first_name.clone(),
                last_name: candidate.last_name.clone(),
                email: candidate.email.clone(),
            },
            job: PayloadJob {
                id: job.job_id,
                title: job.title.clone(),
                description: job.description.clone(),
            },
            questions: questions
                .iter()
                .map(|q| PayloadQuestion {
                    id: q.question_id,
                    text: q.text.clone(),
                    question_type: q.category.to_lowercase(),
                })
                .collect(),
            interviewer_prompt: interviewer_prompt.to_string(),
            evaluation_materials: EvaluationMaterials {
                resume_text: resume_text.to_string(),
                job_description: job.description.clone(),
            },
        }
    }
}
