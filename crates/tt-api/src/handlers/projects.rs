//! Project handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tt_models::{NewProject, Project};

use crate::error::{ApiError, ApiResult};
use crate::state::{current_user, require_admin, AppState};

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    current_user(&store)?;
    Ok(Json(store.projects()))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewProject>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    let project = store.add_project(body)?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<Project>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    body.id = id.clone();
    let project = store
        .update_project(body)
        .ok_or_else(|| ApiError::not_found("Project", &id))?;
    Ok(Json(project))
}

/// DELETE /api/projects/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    if store.delete_project(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Project", &id))
    }
}
