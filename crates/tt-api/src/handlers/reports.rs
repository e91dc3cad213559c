//! Report handlers

use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tt_reports::{
    completed_tasks, seconds_by_member, seconds_by_project, seconds_by_task, total_seconds, Period,
    ReportRow,
};

use crate::error::{ApiError, ApiResult};
use crate::state::{current_user, AppState};

#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    pub period: Option<String>,
}

/// Aggregated report data. Members only get the fields their view
/// shows; the admin-only breakdowns stay `null` for them.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub by_project: Vec<ReportRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_member: Option<Vec<ReportRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub by_task: Option<Vec<ReportRow>>,
    pub total_seconds: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_task_count: Option<usize>,
}

/// GET /api/reports/summary?period=all|day|week|month|year
pub async fn summary(
    State(state): State<AppState>,
    Query(query): Query<ReportQuery>,
) -> ApiResult<impl IntoResponse> {
    let period: Period = query
        .period
        .as_deref()
        .unwrap_or("all")
        .parse()
        .map_err(ApiError::bad_request)?;

    let store = state.store();
    let user = current_user(&store)?;

    let all_logs = if user.is_admin() {
        store.time_logs()
    } else {
        store.time_logs_for_user(&user.id)
    };
    let logs = period.filter_logs(&all_logs, Utc::now());
    let tasks = store.tasks();
    let projects = store.projects();
    let users = store.users();

    let summary = if user.is_admin() {
        ReportSummary {
            by_project: seconds_by_project(&logs, &tasks, &projects),
            by_member: Some(seconds_by_member(&logs, &users)),
            by_task: Some(seconds_by_task(&logs, &tasks)),
            total_seconds: total_seconds(&logs),
            completed_task_count: None,
        }
    } else {
        ReportSummary {
            by_project: seconds_by_project(&logs, &tasks, &projects),
            by_member: None,
            by_task: None,
            total_seconds: total_seconds(&logs),
            completed_task_count: Some(completed_tasks(&tasks, &user.id).len()),
        }
    };

    Ok(Json(summary))
}
