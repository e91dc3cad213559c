//! Member management handlers
//!
//! Listing is open to any logged-in user; mutations are admin-only.
//! The profile path is separate: it updates the session's own user and
//! can never change a password.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tt_models::{NewMember, User};

use crate::error::{ApiError, ApiResult};
use crate::state::{current_user, require_admin, AppState};

/// GET /api/members
pub async fn list(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let store = state.store();
    current_user(&store)?;

    let members: Vec<User> = store.users().iter().map(User::sanitized).collect();
    Ok(Json(members))
}

/// POST /api/members
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<NewMember>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    let user = store.add_member(body)?;
    Ok((StatusCode::CREATED, Json(user.sanitized())))
}

/// PUT /api/members/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(mut body): Json<User>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    body.id = id.clone();
    let user = store
        .update_member(body)
        .ok_or_else(|| ApiError::not_found("User", &id))?;
    Ok(Json(user.sanitized()))
}

/// DELETE /api/members/:id
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    require_admin(&store)?;

    store.delete_member(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/profile
///
/// Always targets the session's own user, whatever id the body claims.
pub async fn update_profile(
    State(state): State<AppState>,
    Json(mut body): Json<User>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store();
    let me = current_user(&store)?;

    body.id = me.id.clone();
    let user = store
        .update_user(body)
        .ok_or_else(|| ApiError::not_found("User", &me.id))?;
    Ok(Json(user.sanitized()))
}
