//! Core traits shared by the domain models

/// Primary key type. Ids are human-readable strings such as `user-1`
/// or `task-1723190400000`, generated from epoch milliseconds.
pub type Id = String;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Base trait for all domain entities
pub trait Entity: Identifiable {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}
