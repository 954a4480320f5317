//! Note identifiers and sharded-path utilities.
//!
//! Every note is keyed by a *canonical* UUID: **32 lowercase hexadecimal characters** with no
//! hyphens, the same value produced by `Uuid::new_v4().simple().to_string()`.
//!
//! Canonical form is required for identifiers arriving from outside the core (API paths, CLI
//! arguments). Use [`ShardableUuid::parse`] to validate them; uppercase, hyphenated, wrong-length
//! or non-hex inputs are rejected.
//!
//! ## Sharded directory layout
//! For a canonical UUID `u`, the file-backed store keeps a note under:
//! `parent_dir/<u[0..2]>/<u[2..4]>/<u>/`
//!
//! Example:
//! `note_data/notes/55/0e/550e8400e29b41d4a716446655440000/`

mod id;

pub use id::{ShardableUuid, Uuid};

/// Error type for identifier operations.
#[derive(Debug, thiserror::Error)]
pub enum UuidError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for identifier operations.
pub type UuidResult<T> = Result<T, UuidError>;
