//! Task handlers
//!
//! Admins see and manage every task; members see the tasks assigned to
//! them and may update those (status changes from the board).

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tt_models::{NewTask, Task};

use crate::error::{ApiError, ApiResult};
use crate::state::{current_user, require_admin, AppState};

/// GET /api/tasks
pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    let user = current_user(&store)?;

    let tasks = if user.is_admin() {
        store.tasks()
    } else {
        store.tasks_for_user(&user.id)
    };
    Ok(Json(tasks))
}

/// GET /api/tasks/:id
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    current_user(&store)?;

    let task = store
        .task(&id)
        .ok_or_else(|| ApiError::not_found("Task", &id))?;
    Ok(Json(task))
}

/// POST /api/tasks
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewTask>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    let task = store.add_task(body)?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /api/tasks/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<Task>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    let user = current_user(&store)?;

    let existing = store
        .task(&id)
        .ok_or_else(|| ApiError::not_found("Task", &id))?;
    if !user.is_admin() && !existing.is_assigned_to(&user.id) {
        return Err(ApiError::forbidden("Not your task"));
    }

    body.id = id.clone();
    let task = store
        .update_task(body)
        .ok_or_else(|| ApiError::not_found("Task", &id))?;
    Ok(Json(task))
}

/// DELETE /api/tasks/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    if store.delete_task(&id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::not_found("Task", &id))
    }
}
