//! # API REST
//!
//! REST API for the notes service.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - translating core errors into status codes
//!
//! Uses `api-shared` for the JSON shapes and `notes-core` for everything else.

#![warn(rust_2018_idioms)]

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{router, ApiDoc, AppState};
