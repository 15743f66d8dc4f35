pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::config::Config;
use crate::services::{
    notification_service::NotificationService, prompt_service::PromptService,
    resume_service::ResumeService, scheduling_service::SchedulingService,
};
use axum::routing::{get, post};
use axum::Router;
use reqwest::Client;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub scheduling_service: SchedulingService,
}

impl AppState {
    /// Clients are constructed here and injected; nothing in the crate
    /// reaches for process-global handles.
    pub fn new(pool: PgPool, config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        let resume_service = ResumeService::new(config.uploads_dir.clone());
        let prompt_service = PromptService::new(pool.clone());
        let notification_service =
            NotificationService::new(http_client, config.send_login_links_url.clone());
        let scheduling_service = SchedulingService::new(
            pool.clone(),
            resume_service,
            prompt_service,
            notification_service,
            config.auth_token_length,
        );

        Self {
            pool,
            scheduling_service,
        }
    }
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route(
            "/functions/v1/schedule-interview",
            post(routes::schedule::schedule_interview),
        )
        .route(
            "/functions/v1/interviewer-queue/:auth_token",
            get(routes::schedule::get_queue_entry),
        )
        .with_state(app_state)
}
