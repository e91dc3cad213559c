//! Auth handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::{current_user, AppState};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    let user = store
        .login(&body.email, &body.password)
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    info!(user_id = %user.id, "User logged in");
    Ok(Json(user.sanitized()))
}

/// POST /api/auth/logout
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    state.store().logout();
    StatusCode::NO_CONTENT
}

/// GET /api/auth/me
pub async fn me(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    let user = current_user(&store)?;
    Ok(Json(user.sanitized()))
}
