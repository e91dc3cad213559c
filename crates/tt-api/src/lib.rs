//! # tt-api
//!
//! REST surface over the store. Handlers lock the shared store for the
//! duration of each request, which serializes every operation through
//! one writer; no request ever observes a partially applied mutation.
//!
//! Responses are plain JSON; user objects are sanitized so the stored
//! password never leaves the process.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::router;
pub use state::AppState;
