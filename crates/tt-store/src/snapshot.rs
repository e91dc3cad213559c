//! Persisted snapshot format
//!
//! One JSON object holds the full entity state. The wire names are
//! fixed; a snapshot written by an earlier session must reload
//! field-for-field.

use serde::{Deserialize, Serialize};
use tt_models::{Project, Task, TimeLog, User};

use crate::seed;

/// The full serialized store state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub time_logs: Vec<TimeLog>,
    /// Older snapshots predate departments; default them to the seed
    /// list when the field is missing.
    #[serde(default = "seed::departments")]
    pub departments: Vec<String>,
}
