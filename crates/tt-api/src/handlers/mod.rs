//! Request handlers, one module per resource

pub mod auth;
pub mod departments;
pub mod members;
pub mod projects;
pub mod reports;
pub mod tasks;
pub mod time_logs;
pub mod timer;
