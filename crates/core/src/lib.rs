//! # Notes Core
//!
//! Business logic for the notes system:
//! - the [`Note`] record with its list and detail projections
//! - the closed [`Tag`] set and lenient tag-filter parsing
//! - the [`NoteStore`] contract with in-memory and file-backed implementations
//! - [`NoteService`]: create, list (paged, tag-filtered), get, update, delete, word statistics
//!
//! **No API concerns**: HTTP routing, JSON shapes and OpenAPI documents belong in `api-shared`
//! and `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod note;
pub mod page;
pub mod service;
pub mod statistics;
pub mod store;
pub mod tags;

pub use config::{CoreConfig, StoreKind};
pub use constants::{DEFAULT_NOTE_DATA_DIR, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use error::{NoteError, NoteResult};
pub use note::{NewNote, Note, NoteDetail, NoteId, NoteRequest, NoteSummary};
pub use notes_types::{NonEmptyText, TextError};
pub use page::{Page, PageRequest};
pub use service::NoteService;
pub use statistics::WordStatistics;
pub use store::{FileNoteStore, MemoryNoteStore, NoteStore};
pub use tags::{parse_tag_filter, Tag};
