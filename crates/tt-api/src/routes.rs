//! API routes

use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers::{auth, departments, members, projects, reports, tasks, time_logs, timer};
use crate::state::AppState;

/// Create the complete application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}

fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_router())
        .nest("/members", members_router())
        .route("/profile", put(members::update_profile))
        .nest("/projects", projects_router())
        .nest("/tasks", tasks_router())
        .route("/time_logs", get(time_logs::list))
        .nest("/departments", departments_router())
        .route("/reports/summary", get(reports::summary))
}

fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/me", get(auth::me))
}

fn members_router() -> Router<AppState> {
    Router::new()
        .route("/", get(members::list))
        .route("/", post(members::create))
        .route("/:id", put(members::update))
        .route("/:id", delete(members::delete))
}

fn projects_router() -> Router<AppState> {
    Router::new()
        .route("/", get(projects::list))
        .route("/", post(projects::create))
        .route("/:id", put(projects::update))
        .route("/:id", delete(projects::delete))
}

fn tasks_router() -> Router<AppState> {
    Router::new()
        .route("/", get(tasks::list))
        .route("/", post(tasks::create))
        .route("/:id", get(tasks::get))
        .route("/:id", put(tasks::update))
        .route("/:id", delete(tasks::delete))
        .route("/:id/timer", get(timer::active))
        .route("/:id/timer/start", post(timer::start))
        .route("/:id/timer/pause", post(timer::pause))
        .route("/:id/timer/resume", post(timer::resume))
        .route("/:id/timer/stop", post(timer::stop))
}

fn departments_router() -> Router<AppState> {
    Router::new()
        .route("/", get(departments::list))
        .route("/", post(departments::create))
        .route("/:name", delete(departments::delete))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
