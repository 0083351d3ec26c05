pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::jobs::handlers as jobs;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        // Resume API
        .route("/resume/upload", post(resumes::handle_upload))
        .route("/resume/:id", get(resumes::handle_get_resume))
        .route("/resume/feedback/:id", get(resumes::handle_feedback))
        .route("/resume/match/:id", get(resumes::handle_match))
        .route("/resume/skills/:id", get(resumes::handle_skills))
        // Jobs API (read-only)
        .route("/jobs", get(jobs::handle_list_jobs))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .with_state(state)
}
