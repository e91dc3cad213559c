//! # tt-reports
//!
//! Report aggregation: group-by-and-sum over in-memory slices of time
//! logs. Pure functions only; the caller fetches the data from the
//! store and picks the period.

pub mod period;
pub mod summary;

pub use period::Period;
pub use summary::{
    completed_tasks, seconds_by_member, seconds_by_project, seconds_by_task, total_seconds,
    format_hours_minutes, ReportRow,
};
