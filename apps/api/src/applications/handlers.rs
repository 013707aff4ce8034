use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::{debug, info};

use crate::applications::grouping::{group_by_job_title, GroupedApplications};
use crate::auth::token::Claims;
use crate::errors::AppError;
use crate::models::application::{Application, ApplicationPayload};
use crate::state::AppState;

/// POST /api/applications
///
/// The referenced job is not looked up here. A dangling reference surfaces
/// later as an "Uncategorized" entry in the grouped view.
pub async fn handle_submit_application(
    State(state): State<AppState>,
    payload: Result<Json<ApplicationPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Application>), AppError> {
    let Json(payload) = payload?;
    let application = state.store.insert_application(payload.validate()?).await?;
    info!(
        "Stored application {} for job {}",
        application.id, application.job_id
    );
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/master/applications
pub async fn handle_grouped_applications(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<GroupedApplications>, AppError> {
    let applications = state.store.list_applications_with_jobs().await?;
    let grouped = group_by_job_title(&applications);
    debug!(
        "{} applications in {} groups for {}",
        applications.len(),
        grouped.len(),
        claims.username
    );
    Ok(Json(grouped))
}
