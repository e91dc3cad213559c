//! Task model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tt_core::traits::{Entity, Id, Identifiable};
use validator::Validate;

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    #[serde(rename = "To Do")]
    ToDo,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Done")]
    Done,
}

impl TaskStatus {
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskStatus::ToDo => write!(f, "To Do"),
            TaskStatus::InProgress => write!(f, "In Progress"),
            TaskStatus::Done => write!(f, "Done"),
        }
    }
}

/// Task entity
///
/// `assignee_id` may be the empty string when the assignee was deleted
/// and no admin remained to inherit the task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub project_id: Id,
    pub assignee_id: Id,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
    pub department: String,
}

impl Task {
    pub fn is_assigned_to(&self, user_id: &str) -> bool {
        self.assignee_id == user_id
    }
}

impl Identifiable for Task {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Task {
    const TYPE_NAME: &'static str = "Task";
}

/// New task creation parameters
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub project_id: Id,

    #[serde(default)]
    pub assignee_id: Id,

    pub due_date: NaiveDate,
    pub status: TaskStatus,

    #[serde(default)]
    pub department: String,
}

impl NewTask {
    pub fn into_task(self, id: Id) -> Task {
        Task {
            id,
            title: self.title,
            description: self.description,
            project_id: self.project_id,
            assignee_id: self.assignee_id,
            due_date: self.due_date,
            status: self.status,
            department: self.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_values() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::ToDo).unwrap(),
            "\"To Do\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"In Progress\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::Done).unwrap(),
            "\"Done\""
        );

        let status: TaskStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, TaskStatus::InProgress);
    }

    #[test]
    fn test_task_field_names() {
        let task = Task {
            id: "task-1".to_string(),
            title: "Design Homepage Mockup".to_string(),
            description: String::new(),
            project_id: "proj-1".to_string(),
            assignee_id: "user-2".to_string(),
            due_date: NaiveDate::from_ymd_opt(2024, 9, 15).unwrap(),
            status: TaskStatus::ToDo,
            department: "Creative".to_string(),
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["projectId"], "proj-1");
        assert_eq!(value["assigneeId"], "user-2");
        assert_eq!(value["dueDate"], "2024-09-15");
        assert_eq!(value["status"], "To Do");
    }
}
