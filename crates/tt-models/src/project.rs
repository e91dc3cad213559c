//! Project model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tt_core::traits::{Entity, Id, Identifiable};
use validator::Validate;

/// Project entity
///
/// `member_ids` is a plain list of user ids with no referential
/// integrity enforcement; a deleted user may linger here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub member_ids: Vec<Id>,
}

impl Project {
    pub fn has_member(&self, user_id: &str) -> bool {
        self.member_ids.iter().any(|id| id == user_id)
    }
}

impl Identifiable for Project {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for Project {
    const TYPE_NAME: &'static str = "Project";
}

/// New project creation parameters
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[serde(default)]
    pub description: String,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    #[serde(default)]
    pub member_ids: Vec<Id>,
}

impl NewProject {
    pub fn into_project(self, id: Id) -> Project {
        Project {
            id,
            name: self.name,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            member_ids: self.member_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_round_trip() {
        let json = r#"{
            "id": "proj-1",
            "name": "Website Redesign",
            "description": "Complete overhaul of the corporate website.",
            "startDate": "2024-08-01",
            "endDate": "2024-12-31",
            "memberIds": ["user-1", "user-2"]
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Website Redesign");
        assert!(project.has_member("user-2"));
        assert!(!project.has_member("user-3"));

        let value = serde_json::to_value(&project).unwrap();
        assert_eq!(value["startDate"], "2024-08-01");
        assert_eq!(value["memberIds"][0], "user-1");
    }
}
