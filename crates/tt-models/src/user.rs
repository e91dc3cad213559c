//! User model

use serde::{Deserialize, Serialize};
use tt_core::traits::{Entity, Id, Identifiable};
use validator::Validate;

/// The two user roles. Admin has management capabilities, Member has
/// self-service task/timer access only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "Admin"),
            Role::Member => write!(f, "Member"),
        }
    }
}

/// User entity
///
/// The password is stored in plaintext because this mirrors a
/// local-only simulation; it is write-only towards API consumers
/// (see [`User::sanitized`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub work_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

impl User {
    /// Copy of this user with the password removed, for API responses
    pub fn sanitized(&self) -> User {
        User {
            password: None,
            ..self.clone()
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

impl Identifiable for User {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Entity for User {
    const TYPE_NAME: &'static str = "User";
}

/// New member creation parameters (everything but the id)
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMember {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub name: String,

    #[validate(email(message = "is not a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub password: Option<String>,

    pub role: Role,

    #[serde(default)]
    pub avatar_url: String,

    #[serde(default)]
    pub designation: Option<String>,

    #[serde(default)]
    pub work_phone: Option<String>,

    #[serde(default)]
    pub personal_mobile: Option<String>,

    #[serde(default)]
    pub department: Option<String>,
}

impl NewMember {
    /// Materialize into a [`User`] with the given id
    pub fn into_user(self, id: Id) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            password: self.password,
            role: self.role,
            avatar_url: self.avatar_url,
            designation: self.designation,
            work_phone: self.work_phone,
            personal_mobile: self.personal_mobile,
            department: self.department,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "user-1".to_string(),
            name: "Admin User".to_string(),
            email: "admin@example.com".to_string(),
            password: Some("password".to_string()),
            role: Role::Admin,
            avatar_url: "https://i.pravatar.cc/150?u=admin@example.com".to_string(),
            designation: Some("Project Manager".to_string()),
            work_phone: Some("123-456-7890".to_string()),
            personal_mobile: Some("098-765-4321".to_string()),
            department: Some("Web Development".to_string()),
        }
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"Admin\"");
        assert_eq!(serde_json::to_string(&Role::Member).unwrap(), "\"Member\"");
    }

    #[test]
    fn test_user_wire_names_are_camel_case() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("avatarUrl").is_some());
        assert!(value.get("workPhone").is_some());
        assert!(value.get("personalMobile").is_some());
        assert!(value.get("avatar_url").is_none());
    }

    #[test]
    fn test_sanitized_drops_password() {
        let user = sample_user().sanitized();
        assert!(user.password.is_none());

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
    }

    #[test]
    fn test_new_member_validation() {
        let member = NewMember {
            name: String::new(),
            email: "not-an-email".to_string(),
            password: None,
            role: Role::Member,
            avatar_url: String::new(),
            designation: None,
            work_phone: None,
            personal_mobile: None,
            department: None,
        };

        let errors = member.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
