use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::jobs::store::list_jobs;
use crate::models::job::JobRow;
use crate::state::AppState;

/// GET /jobs
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<JobRow>>, AppError> {
    Ok(Json(list_jobs(&state.db).await?))
}
