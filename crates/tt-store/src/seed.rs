//! Seed fixtures
//!
//! Fixed data the store is initialized with on first run: two users
//! (one admin, one member), two projects, three tasks spanning all
//! statuses, and one completed time log.

use chrono::NaiveDate;
use tt_models::{Project, Role, Task, TaskStatus, TimeLog, User};

use crate::snapshot::Snapshot;

pub fn departments() -> Vec<String> {
    [
        "Web Development",
        "SEO",
        "Sales",
        "Digital Marketing",
        "Creative",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

pub fn users() -> Vec<User> {
    vec![
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
        },
        User {
            id: "user-2".to_string(),
            name: "Team Member".to_string(),
            email: "member@example.com".to_string(),
            password: Some("password".to_string()),
            role: Role::Member,
            avatar_url: "https://i.pravatar.cc/150?u=member@example.com".to_string(),
            designation: Some("Frontend Developer".to_string()),
            work_phone: Some("123-456-7891".to_string()),
            personal_mobile: Some("098-765-4322".to_string()),
            department: Some("Web Development".to_string()),
        },
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "proj-1".to_string(),
            name: "Website Redesign".to_string(),
            description: "Complete overhaul of the corporate website.".to_string(),
            start_date: date(2024, 8, 1),
            end_date: date(2024, 12, 31),
            member_ids: vec!["user-1".to_string(), "user-2".to_string()],
        },
        Project {
            id: "proj-2".to_string(),
            name: "Marketing Campaign Q3".to_string(),
            description: "Digital marketing campaign for the new product launch.".to_string(),
            start_date: date(2024, 7, 1),
            end_date: date(2024, 9, 30),
            member_ids: vec!["user-1".to_string(), "user-2".to_string()],
        },
    ]
}

pub fn tasks() -> Vec<Task> {
    vec![
        Task {
            id: "task-1".to_string(),
            title: "Design Homepage Mockup".to_string(),
            description: "Create a high-fidelity mockup in Figma for the new homepage.".to_string(),
            project_id: "proj-1".to_string(),
            assignee_id: "user-2".to_string(),
            due_date: date(2024, 9, 15),
            status: TaskStatus::ToDo,
            department: "Creative".to_string(),
        },
        Task {
            id: "task-2".to_string(),
            title: "Develop User Authentication".to_string(),
            description: "Implement login and registration functionality.".to_string(),
            project_id: "proj-1".to_string(),
            assignee_id: "user-2".to_string(),
            due_date: date(2024, 9, 30),
            status: TaskStatus::InProgress,
            department: "Web Development".to_string(),
        },
        Task {
            id: "task-3".to_string(),
            title: "Create Social Media Ads".to_string(),
            description: "Design and write copy for Facebook and Instagram ads.".to_string(),
            project_id: "proj-2".to_string(),
            assignee_id: "user-2".to_string(),
            due_date: date(2024, 8, 20),
            status: TaskStatus::Done,
            department: "Digital Marketing".to_string(),
        },
    ]
}

pub fn time_logs() -> Vec<TimeLog> {
    // 2024-08-10 09:00:00 UTC .. 11:30:00 UTC, 2.5 hours in seconds
    vec![TimeLog {
        id: "log-1".to_string(),
        task_id: "task-3".to_string(),
        user_id: "user-2".to_string(),
        start_time: 1_723_280_400_000,
        end_time: Some(1_723_289_400_000),
        duration: 9000,
        is_paused: false,
    }]
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        users: users(),
        projects: projects(),
        tasks: tasks(),
        time_logs: time_logs(),
        departments: departments(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date")
}
