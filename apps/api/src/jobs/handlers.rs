use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::job::{Job, JobPayload};
use crate::state::AppState;

/// GET /api/jobs
///
/// Newest first. An empty board is `[]` with 200.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = state.store.list_jobs().await?;
    debug!("Found {} jobs", jobs.len());
    Ok(Json(jobs))
}

/// POST /api/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    payload: Result<Json<JobPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let Json(payload) = payload?;
    let job = state.store.insert_job(payload.validate()?).await?;
    info!("Listed job {} ({})", job.id, job.title);
    Ok((StatusCode::CREATED, Json(job)))
}
