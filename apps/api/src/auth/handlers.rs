use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// POST /api/master/login
///
/// A body that cannot be read is treated like wrong credentials.
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Ok(Json(request)) = payload else {
        warn!("Rejected master login with unreadable body");
        return Err(AppError::Unauthorized("Invalid credentials"));
    };

    if !state.master.matches(&request.username, &request.password) {
        warn!("Rejected master login attempt");
        return Err(AppError::Unauthorized("Invalid credentials"));
    }

    let token = state.tokens.issue(&request.username)?;
    info!("Master login succeeded");
    Ok(Json(LoginResponse { token }))
}
