//! # tt-models
//!
//! Domain models for TrackTime RS: users, projects, tasks, and time
//! logs, together with the parameter structs used to create them.
//!
//! All models serialize with the camelCase field names of the persisted
//! snapshot, so a snapshot written by one session round-trips exactly.

pub mod project;
pub mod task;
pub mod time_log;
pub mod user;

pub use project::{NewProject, Project};
pub use task::{NewTask, Task, TaskStatus};
pub use time_log::{TimeLog, TimerState};
pub use user::{NewMember, Role, User};
