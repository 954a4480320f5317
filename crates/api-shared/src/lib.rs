//! # API Shared
//!
//! Wire types and shared services for the notes APIs.
//!
//! Contains:
//! - JSON request/response shapes with OpenAPI schemas (`notes` module)
//! - `HealthService`
//!
//! Field names are camelCase on the wire (`createdDate`, `totalElements`).

pub mod health;
pub mod notes;

pub use health::{HealthRes, HealthService};
pub use notes::*;
