//! The store: single source of truth for all entity collections
//!
//! Synchronous in-memory state with a persistence side-channel. Every
//! mutating operation flushes the whole snapshot to the backend before
//! returning; a failed flush is logged and the in-memory mutation
//! stands for the rest of the session. Every read hands out clones, so
//! callers can never alias store state.

use tracing::{error, warn};
use tt_core::clock::Clock;
use tt_core::error::{TrackerError, TrackerResult};
use tt_core::traits::Entity;
use tt_models::{NewMember, NewProject, NewTask, Project, Role, Task, TimeLog, User};
use validator::Validate;

use crate::seed;
use crate::snapshot::Snapshot;
use crate::storage::StorageBackend;

pub struct Store {
    pub(crate) data: Snapshot,
    pub(crate) backend: Box<dyn StorageBackend>,
    pub(crate) clock: Box<dyn Clock>,
}

impl Store {
    /// Hydrate from the persisted snapshot, falling back to the seed
    /// fixtures when nothing usable is stored. The seed state is
    /// persisted right away so the next session sees it.
    pub fn open(backend: Box<dyn StorageBackend>, clock: Box<dyn Clock>) -> Self {
        let data = match backend.load() {
            Ok(Some(raw)) => match serde_json::from_str::<Snapshot>(&raw) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    warn!("Stored snapshot is unparsable, reseeding: {e}");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to load snapshot, reseeding: {e}");
                None
            }
        };

        match data {
            Some(data) => Self {
                data,
                backend,
                clock,
            },
            None => {
                let store = Self {
                    data: seed::snapshot(),
                    backend,
                    clock,
                };
                store.persist();
                store
            }
        }
    }

    /// Flush the whole in-memory state to the backend. Failures are
    /// surfaced in the log only; the in-memory state stays
    /// authoritative for the session.
    pub(crate) fn persist(&self) {
        let raw = match serde_json::to_string(&self.data) {
            Ok(raw) => raw,
            Err(e) => {
                error!("Failed to serialize snapshot: {e}");
                return;
            }
        };
        if let Err(e) = self.backend.save(&raw) {
            error!("Failed to persist snapshot: {e}");
        }
    }

    /// Timestamp-derived id, bumped forward until unique
    pub(crate) fn next_id(&self, prefix: &str, taken: impl Fn(&str) -> bool) -> String {
        let mut millis = self.clock.now_millis();
        loop {
            let id = format!("{prefix}-{millis}");
            if !taken(&id) {
                return id;
            }
            millis += 1;
        }
    }

    /// Current wall-clock time as the store sees it, for derived
    /// display values
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    // --- Reads (all return independent clones) ---

    pub fn users(&self) -> Vec<User> {
        self.data.users.clone()
    }

    pub fn user(&self, id: &str) -> Option<User> {
        self.data.users.iter().find(|u| u.id == id).cloned()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.data.projects.clone()
    }

    pub fn project(&self, id: &str) -> Option<Project> {
        self.data.projects.iter().find(|p| p.id == id).cloned()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.data.tasks.clone()
    }

    pub fn task(&self, id: &str) -> Option<Task> {
        self.data.tasks.iter().find(|t| t.id == id).cloned()
    }

    pub fn tasks_for_user(&self, user_id: &str) -> Vec<Task> {
        self.data
            .tasks
            .iter()
            .filter(|t| t.assignee_id == user_id)
            .cloned()
            .collect()
    }

    pub fn time_logs(&self) -> Vec<TimeLog> {
        self.data.time_logs.clone()
    }

    pub fn time_logs_for_user(&self, user_id: &str) -> Vec<TimeLog> {
        self.data
            .time_logs
            .iter()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect()
    }

    pub fn departments(&self) -> Vec<String> {
        self.data.departments.clone()
    }

    // --- Members ---

    pub fn add_member(&mut self, member: NewMember) -> TrackerResult<User> {
        member
            .validate()
            .map_err(|e| TrackerError::Validation(e.into()))?;

        let id = self.next_id("user", |id| self.data.users.iter().any(|u| u.id == id));
        let user = member.into_user(id);
        self.data.users.push(user.clone());
        self.persist();
        Ok(user)
    }

    /// Full replace of a member record. An omitted or empty password
    /// keeps the one already stored; it is never silently erased.
    pub fn update_member(&mut self, updated: User) -> Option<User> {
        let existing = self.data.users.iter_mut().find(|u| u.id == updated.id)?;

        let password = updated
            .password
            .clone()
            .filter(|p| !p.is_empty())
            .or_else(|| existing.password.clone());
        *existing = User {
            password,
            ..updated
        };

        let result = existing.clone();
        self.persist();
        Some(result)
    }

    /// Profile update path: the password field is never modified here,
    /// whatever the caller supplies.
    pub fn update_user(&mut self, updated: User) -> Option<User> {
        let existing = self.data.users.iter_mut().find(|u| u.id == updated.id)?;

        *existing = User {
            password: existing.password.clone(),
            ..updated
        };

        let result = existing.clone();
        self.persist();
        Some(result)
    }

    /// Delete a member. Refuses to remove the sole remaining admin.
    /// Tasks assigned to the deleted user are handed to the first
    /// remaining admin (or left unassigned), and their time logs go
    /// with them.
    pub fn delete_member(&mut self, user_id: &str) -> TrackerResult<()> {
        let target = self
            .data
            .users
            .iter()
            .find(|u| u.id == user_id)
            .ok_or_else(|| TrackerError::not_found(User::TYPE_NAME, user_id))?;

        if target.role == Role::Admin {
            let admin_count = self
                .data
                .users
                .iter()
                .filter(|u| u.role == Role::Admin)
                .count();
            if admin_count <= 1 {
                return Err(TrackerError::LastAdmin);
            }
        }

        self.data.users.retain(|u| u.id != user_id);

        let fallback_assignee = self
            .data
            .users
            .iter()
            .find(|u| u.role == Role::Admin)
            .map(|u| u.id.clone())
            .unwrap_or_default();
        for task in &mut self.data.tasks {
            if task.assignee_id == user_id {
                task.assignee_id = fallback_assignee.clone();
            }
        }

        self.data.time_logs.retain(|l| l.user_id != user_id);
        self.persist();
        Ok(())
    }

    // --- Projects ---

    pub fn add_project(&mut self, project: NewProject) -> TrackerResult<Project> {
        project
            .validate()
            .map_err(|e| TrackerError::Validation(e.into()))?;

        let id = self.next_id("proj", |id| self.data.projects.iter().any(|p| p.id == id));
        let project = project.into_project(id);
        self.data.projects.push(project.clone());
        self.persist();
        Ok(project)
    }

    pub fn update_project(&mut self, updated: Project) -> Option<Project> {
        let existing = self
            .data
            .projects
            .iter_mut()
            .find(|p| p.id == updated.id)?;
        *existing = updated.clone();
        self.persist();
        Some(updated)
    }

    /// Plain removal; tasks keep their dangling `project_id`, the same
    /// policy as department deletion.
    pub fn delete_project(&mut self, project_id: &str) -> bool {
        let before = self.data.projects.len();
        self.data.projects.retain(|p| p.id != project_id);
        if self.data.projects.len() < before {
            self.persist();
            true
        } else {
            false
        }
    }

    // --- Tasks ---

    pub fn add_task(&mut self, task: NewTask) -> TrackerResult<Task> {
        task.validate()
            .map_err(|e| TrackerError::Validation(e.into()))?;

        let id = self.next_id("task", |id| self.data.tasks.iter().any(|t| t.id == id));
        let task = task.into_task(id);
        self.data.tasks.push(task.clone());
        self.persist();
        Ok(task)
    }

    pub fn update_task(&mut self, updated: Task) -> Option<Task> {
        let existing = self.data.tasks.iter_mut().find(|t| t.id == updated.id)?;
        *existing = updated.clone();
        self.persist();
        Some(updated)
    }

    /// Deleting a task cascades to its time logs
    pub fn delete_task(&mut self, task_id: &str) -> bool {
        let before = self.data.tasks.len();
        self.data.tasks.retain(|t| t.id != task_id);
        if self.data.tasks.len() < before {
            self.data.time_logs.retain(|l| l.task_id != task_id);
            self.persist();
            true
        } else {
            false
        }
    }

    // --- Departments ---

    /// Idempotent: adding an existing name is a no-op
    pub fn add_department(&mut self, name: impl Into<String>) -> String {
        let name = name.into();
        if !self.data.departments.iter().any(|d| *d == name) {
            self.data.departments.push(name.clone());
            self.persist();
        }
        name
    }

    /// Removes the name only; users and tasks referencing it keep the
    /// dangling string.
    pub fn delete_department(&mut self, name: &str) -> bool {
        let before = self.data.departments.len();
        self.data.departments.retain(|d| d != name);
        if self.data.departments.len() < before {
            self.persist();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use tt_core::error::TrackerError;
    use tt_models::{NewMember, NewTask, Role, TaskStatus, User};

    use super::*;
    use crate::storage::MemoryStorage;
    use crate::testing::{test_store, ManualClock};

    fn new_member(name: &str, email: &str, role: Role) -> NewMember {
        NewMember {
            name: name.to_string(),
            email: email.to_string(),
            password: Some("secret".to_string()),
            role,
            avatar_url: String::new(),
            designation: None,
            work_phone: None,
            personal_mobile: None,
            department: None,
        }
    }

    #[test]
    fn test_first_open_seeds_and_persists() {
        let (store, storage, _clock) = test_store();

        assert_eq!(store.users().len(), 2);
        assert_eq!(store.projects().len(), 2);
        assert_eq!(store.tasks().len(), 3);
        assert_eq!(store.time_logs().len(), 1);
        assert_eq!(store.departments().len(), 5);

        // the seed snapshot was written immediately
        let raw = storage.saved_snapshot().unwrap();
        let snapshot: Snapshot = serde_json::from_str(&raw).unwrap();
        assert_eq!(snapshot.users.len(), 2);
    }

    #[test]
    fn test_reopen_round_trips_mutations() {
        let storage = MemoryStorage::new();
        let clock = ManualClock::default();
        clock.set_millis(1_000);

        let mut store = Store::open(Box::new(storage.clone()), Box::new(clock.clone()));
        store.add_department("HR");
        let task = store
            .add_task(NewTask {
                title: "Write launch email".to_string(),
                description: String::new(),
                project_id: "proj-2".to_string(),
                assignee_id: "user-2".to_string(),
                due_date: chrono::NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
                status: TaskStatus::ToDo,
                department: "Digital Marketing".to_string(),
            })
            .unwrap();
        drop(store);

        let reopened = Store::open(Box::new(storage), Box::new(clock));
        assert!(reopened.departments().contains(&"HR".to_string()));
        assert_eq!(reopened.task(&task.id), Some(task));
        assert_eq!(reopened.users().len(), 2);
    }

    #[test]
    fn test_unparsable_snapshot_reseeds() {
        let storage = MemoryStorage::new();
        storage.save("definitely not json").unwrap();

        let store = Store::open(Box::new(storage.clone()), Box::new(ManualClock::default()));
        assert_eq!(store.users().len(), 2);

        let raw = storage.saved_snapshot().unwrap();
        assert!(serde_json::from_str::<Snapshot>(&raw).is_ok());
    }

    #[test]
    fn test_snapshot_without_departments_gets_seed_list() {
        let storage = MemoryStorage::new();
        storage
            .save(r#"{"users":[],"projects":[],"tasks":[],"timeLogs":[]}"#)
            .unwrap();

        let store = Store::open(Box::new(storage), Box::new(ManualClock::default()));
        assert!(store.users().is_empty());
        assert_eq!(store.departments(), seed::departments());
    }

    #[test]
    fn test_reads_hand_out_independent_copies() {
        let (mut store, _storage, _clock) = test_store();

        let mut users = store.users();
        users[0].name = "Mutated".to_string();
        users.clear();
        assert_eq!(store.users()[0].name, "Admin User");

        let mut task = store.task("task-1").unwrap();
        task.title = "Mutated".to_string();
        assert_eq!(store.task("task-1").unwrap().title, "Design Homepage Mockup");

        // and the other way round: a copy taken before a mutation
        let before = store.users();
        store.delete_department("SEO");
        assert_eq!(before.len(), store.users().len());
    }

    #[test]
    fn test_add_member_generates_timestamp_id() {
        let (mut store, _storage, clock) = test_store();
        clock.set_millis(1_723_000_000_000);

        let user = store
            .add_member(new_member("New Person", "new@example.com", Role::Member))
            .unwrap();
        assert_eq!(user.id, "user-1723000000000");
        assert_eq!(store.users().len(), 3);
    }

    #[test]
    fn test_add_member_rejects_invalid_input() {
        let (mut store, _storage, _clock) = test_store();

        let result = store.add_member(new_member("", "not-an-email", Role::Member));
        assert!(matches!(result, Err(TrackerError::Validation(_))));
        assert_eq!(store.users().len(), 2);
    }

    #[test]
    fn test_colliding_ids_are_bumped() {
        let (mut store, _storage, clock) = test_store();
        clock.set_millis(42);

        let a = store
            .add_member(new_member("A", "a@example.com", Role::Member))
            .unwrap();
        let b = store
            .add_member(new_member("B", "b@example.com", Role::Member))
            .unwrap();
        assert_eq!(a.id, "user-42");
        assert_eq!(b.id, "user-43");
    }

    #[test]
    fn test_update_member_preserves_password_when_blank() {
        let (mut store, _storage, _clock) = test_store();
        let mut member = store.user("user-2").unwrap();

        member.name = "Renamed Member".to_string();
        member.password = Some(String::new());
        let updated = store.update_member(member.clone()).unwrap();
        assert_eq!(updated.name, "Renamed Member");
        assert_eq!(updated.password.as_deref(), Some("password"));

        member.password = None;
        let updated = store.update_member(member.clone()).unwrap();
        assert_eq!(updated.password.as_deref(), Some("password"));

        member.password = Some("new-secret".to_string());
        let updated = store.update_member(member).unwrap();
        assert_eq!(updated.password.as_deref(), Some("new-secret"));
    }

    #[test]
    fn test_update_user_never_touches_password() {
        let (mut store, _storage, _clock) = test_store();
        let mut profile = store.user("user-1").unwrap();

        profile.designation = Some("Head of Delivery".to_string());
        profile.password = Some("attempted-change".to_string());
        let updated = store.update_user(profile).unwrap();

        assert_eq!(updated.designation.as_deref(), Some("Head of Delivery"));
        assert_eq!(updated.password.as_deref(), Some("password"));
        assert_eq!(
            store.user("user-1").unwrap().password.as_deref(),
            Some("password")
        );
    }

    #[test]
    fn test_update_unknown_user_is_absence() {
        let (mut store, _storage, _clock) = test_store();
        let ghost = User {
            id: "user-ghost".to_string(),
            name: "Ghost".to_string(),
            email: "ghost@example.com".to_string(),
            password: None,
            role: Role::Member,
            avatar_url: String::new(),
            designation: None,
            work_phone: None,
            personal_mobile: None,
            department: None,
        };
        assert!(store.update_member(ghost.clone()).is_none());
        assert!(store.update_user(ghost).is_none());
    }

    #[test]
    fn test_delete_last_admin_fails_and_leaves_users_unchanged() {
        let (mut store, _storage, _clock) = test_store();

        let result = store.delete_member("user-1");
        assert!(matches!(result, Err(TrackerError::LastAdmin)));
        assert_eq!(store.users().len(), 2);
        assert!(store.user("user-1").is_some());
    }

    #[test]
    fn test_delete_admin_succeeds_when_another_remains() {
        let (mut store, _storage, _clock) = test_store();
        store
            .add_member(new_member("Second Admin", "admin2@example.com", Role::Admin))
            .unwrap();

        store.delete_member("user-1").unwrap();
        assert!(store.user("user-1").is_none());
    }

    #[test]
    fn test_delete_member_cascades_logs_and_reassigns_tasks() {
        let (mut store, _storage, clock) = test_store();
        clock.set_millis(10_000);
        store.start_timer("task-1", "user-2");

        store.delete_member("user-2").unwrap();

        assert!(store.time_logs().iter().all(|l| l.user_id != "user-2"));
        // every task previously assigned to user-2 now points at the admin
        for task in store.tasks() {
            assert_eq!(task.assignee_id, "user-1");
        }
    }

    #[test]
    fn test_delete_unknown_member_is_not_found() {
        let (mut store, _storage, _clock) = test_store();
        let result = store.delete_member("user-ghost");
        assert!(matches!(result, Err(TrackerError::NotFound { .. })));
    }

    #[test]
    fn test_delete_task_cascades_time_logs() {
        let (mut store, _storage, _clock) = test_store();

        assert!(store.delete_task("task-3"));
        assert!(store.task("task-3").is_none());
        assert!(store.time_logs().iter().all(|l| l.task_id != "task-3"));

        assert!(!store.delete_task("task-3"));
    }

    #[test]
    fn test_delete_project_leaves_tasks_dangling() {
        let (mut store, _storage, _clock) = test_store();

        assert!(store.delete_project("proj-1"));
        assert!(store.project("proj-1").is_none());
        assert!(store.tasks().iter().any(|t| t.project_id == "proj-1"));
        assert!(!store.delete_project("proj-1"));
    }

    #[test]
    fn test_add_department_is_idempotent() {
        let (mut store, _storage, _clock) = test_store();

        store.add_department("HR");
        store.add_department("HR");

        let count = store.departments().iter().filter(|d| *d == "HR").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_delete_department_does_not_cascade() {
        let (mut store, _storage, _clock) = test_store();

        assert!(store.delete_department("Creative"));
        assert!(!store.departments().contains(&"Creative".to_string()));
        // the task referencing it keeps the dangling name
        assert!(store.tasks().iter().any(|t| t.department == "Creative"));

        assert!(!store.delete_department("Creative"));
    }

    #[test]
    fn test_failed_persist_keeps_in_memory_state() {
        let (mut store, storage, _clock) = test_store();
        let before = storage.saved_snapshot().unwrap();

        storage.fail_saves(true);
        store.add_department("HR");

        // the session still sees the mutation, durability silently lost
        assert!(store.departments().contains(&"HR".to_string()));
        assert_eq!(storage.saved_snapshot().unwrap(), before);
    }

    #[test]
    fn test_tasks_for_user_filters_by_assignee() {
        let (store, _storage, _clock) = test_store();
        assert_eq!(store.tasks_for_user("user-2").len(), 3);
        assert!(store.tasks_for_user("user-1").is_empty());
    }

    #[test]
    fn test_time_logs_for_user() {
        let (store, _storage, _clock) = test_store();
        assert_eq!(store.time_logs_for_user("user-2").len(), 1);
        assert!(store.time_logs_for_user("user-1").is_empty());
    }
}
