//! Department handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::error::{ApiError, ApiResult};
use crate::state::{current_user, require_admin, AppState};

#[derive(Debug, Deserialize)]
pub struct NewDepartment {
    pub name: String,
}

/// GET /api/departments
pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    current_user(&store)?;
    Ok(Json(store.departments()))
}

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewDepartment>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    if body.name.trim().is_empty() {
        return Err(ApiError::bad_request("Department name must not be empty"));
    }

    let name = store.add_department(body.name);
    Ok((StatusCode::CREATED, Json(name)))
}

/// DELETE /api/departments/:name
pub async fn delete(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    if store.delete_department(&name) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Department", &name))
    }
}
