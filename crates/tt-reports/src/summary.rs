//! Aggregation over time logs
//!
//! Durations are second-granularity integers; hours in the report rows
//! are `duration / 3600` rounded to two decimals, matching what the
//! charts display. Rows keep first-seen order except for the per-task
//! report, which is sorted descending and capped at ten rows.

use serde::Serialize;
use tt_models::{Project, Task, TimeLog, User};

/// One bar of a report chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub hours: f64,
}

const TOP_TASKS: usize = 10;

fn to_hours(seconds: u64) -> f64 {
    (seconds as f64 / 3600.0 * 100.0).round() / 100.0
}

fn accumulate(rows: &mut Vec<(String, u64)>, name: &str, seconds: u64) {
    match rows.iter_mut().find(|(n, _)| n == name) {
        Some((_, total)) => *total += seconds,
        None => rows.push((name.to_string(), seconds)),
    }
}

fn into_report(rows: Vec<(String, u64)>) -> Vec<ReportRow> {
    rows.into_iter()
        .map(|(name, seconds)| ReportRow {
            name,
            hours: to_hours(seconds),
        })
        .collect()
}

/// Seconds grouped by the project of the log's task. Logs whose task or
/// project no longer exists are skipped.
pub fn seconds_by_project(logs: &[TimeLog], tasks: &[Task], projects: &[Project]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for log in logs {
        let Some(task) = tasks.iter().find(|t| t.id == log.task_id) else {
            continue;
        };
        let Some(project) = projects.iter().find(|p| p.id == task.project_id) else {
            continue;
        };
        accumulate(&mut rows, &project.name, log.duration);
    }
    into_report(rows)
}

/// Seconds grouped by the owning user's name
pub fn seconds_by_member(logs: &[TimeLog], users: &[User]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for log in logs {
        let Some(user) = users.iter().find(|u| u.id == log.user_id) else {
            continue;
        };
        accumulate(&mut rows, &user.name, log.duration);
    }
    into_report(rows)
}

/// Seconds grouped by task title, busiest first, capped at ten rows
pub fn seconds_by_task(logs: &[TimeLog], tasks: &[Task]) -> Vec<ReportRow> {
    let mut rows = Vec::new();
    for log in logs {
        let Some(task) = tasks.iter().find(|t| t.id == log.task_id) else {
            continue;
        };
        accumulate(&mut rows, &task.title, log.duration);
    }
    let mut report = into_report(rows);
    report.sort_by(|a, b| b.hours.partial_cmp(&a.hours).unwrap_or(std::cmp::Ordering::Equal));
    report.truncate(TOP_TASKS);
    report
}

/// Total accumulated seconds over all given logs
pub fn total_seconds(logs: &[TimeLog]) -> u64 {
    logs.iter().map(|l| l.duration).sum()
}

/// Tasks a user has finished, for the member view
pub fn completed_tasks<'a>(tasks: &'a [Task], user_id: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| t.assignee_id == user_id && t.status.is_done())
        .collect()
}

/// `"2h 30m"` style display of a second count
pub fn format_hours_minutes(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!("{hours}h {minutes}m")
}
