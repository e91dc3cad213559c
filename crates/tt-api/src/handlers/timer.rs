//! Timer handlers
//!
//! The timer is scoped to the session user and a task: starting stops
//! any log still active for that pair, and pause/resume/stop act on
//! the pair's active log. Illegal transitions come back as 409 rather
//! than mutating anything, mirroring the engine's no-op policy.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tt_models::TimeLog;
use tt_store::Store;

use crate::error::{ApiError, ApiResult};
use crate::state::{current_user, AppState};

/// Active timer with its live display value
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimer {
    #[serde(flatten)]
    pub log: TimeLog,
    /// duration plus the open running interval, in whole seconds; the
    /// client re-fetches or recomputes this every tick
    pub session_seconds: u64,
}

/// GET /api/tasks/:id/timer
///
/// The session user's active log for this task, or null.
pub async fn active(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    let user = current_user(&store)?;

    let timer = store
        .active_log_for_task(&task_id, &user.id)
        .map(|log| ActiveTimer {
            session_seconds: log.session_seconds(store.now_millis()),
            log,
        });
    Ok(Json(timer))
}

/// POST /api/tasks/:id/timer/start
pub async fn start(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    let user = current_user(&store)?;

    if store.task(&task_id).is_none() {
        return Err(ApiError::not_found("Task", &task_id));
    }

    let log = store.start_timer(&task_id, &user.id);
    Ok((StatusCode::CREATED, Json(log)))
}

/// POST /api/tasks/:id/timer/pause
pub async fn pause(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    transition(state, &task_id, Store::pause_timer, "Timer is not running")
}

/// POST /api/tasks/:id/timer/resume
pub async fn resume(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    transition(state, &task_id, Store::resume_timer, "Timer is not paused")
}

/// POST /api/tasks/:id/timer/stop
pub async fn stop(
    State(state): State<AppState>,
    Path(task_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    transition(state, &task_id, Store::stop_timer, "Timer is not active")
}

fn transition(
    state: AppState,
    task_id: &str,
    op: fn(&mut Store, &str) -> Option<TimeLog>,
    conflict_msg: &str,
) -> ApiResult<Json<TimeLog>> {
    let mut store = state.store();
    let user = current_user(&store)?;

    let active = store
        .active_log_for_task(task_id, &user.id)
        .ok_or_else(|| ApiError::not_found("TimeLog", format!("active for {task_id}")))?;

    let log = op(&mut store, &active.id).ok_or_else(|| ApiError::conflict(conflict_msg))?;
    Ok(Json(log))
}
