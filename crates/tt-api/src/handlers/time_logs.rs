//! Time log handlers

use axum::{extract::State, response::IntoResponse, Json};

use crate::error::ApiResult;
use crate::state::{current_user, AppState};

/// GET /api/time_logs
///
/// Admins get every log; members get their own.
pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    let user = current_user(&store)?;

    let logs = if user.is_admin() {
        store.time_logs()
    } else {
        store.time_logs_for_user(&user.id)
    };
    Ok(Json(logs))
}
