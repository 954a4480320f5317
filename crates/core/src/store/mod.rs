//! The note store contract and its implementations.
//!
//! The service only ever talks to a [`NoteStore`]; which engine sits behind it is decided once at
//! startup. Stores hold no business rules: they persist, look up and page, nothing more.

mod file;
mod memory;

pub use file::FileNoteStore;
pub use memory::MemoryNoteStore;

use crate::note::{NewNote, Note, NoteId};
use crate::page::{Page, PageRequest};
use crate::tags::Tag;
use crate::NoteResult;

/// Durable keyed collection of notes.
///
/// Every mutating call (`insert`, `save`, `delete_by_id`) is atomic for the single record it
/// touches. Nothing spans more than one call, so a read followed by a write is *not* atomic.
pub trait NoteStore: Send + Sync {
    /// Stores a new note, assigning a fresh id and `created_date = now`.
    fn insert(&self, note: NewNote) -> NoteResult<Note>;

    /// Overwrites the record with `note.id`, creating it again if it has since been deleted.
    ///
    /// `id` and `created_date` are stored exactly as given.
    fn save(&self, note: Note) -> NoteResult<Note>;

    fn find_by_id(&self, id: &NoteId) -> NoteResult<Option<Note>>;

    fn exists_by_id(&self, id: &NoteId) -> NoteResult<bool>;

    /// Removes the record; a missing id is not an error.
    fn delete_by_id(&self, id: &NoteId) -> NoteResult<()>;

    /// All notes, newest first.
    fn page(&self, request: PageRequest) -> NoteResult<Page<Note>>;

    /// Notes carrying at least one of `tags`, newest first.
    fn page_by_tags(&self, tags: &[Tag], request: PageRequest) -> NoteResult<Page<Note>>;
}

/// Orders notes by `created_date` descending, then by id so equal timestamps have a fixed order.
pub(crate) fn sort_newest_first(notes: &mut [Note]) {
    notes.sort_by(|a, b| {
        b.created_date
            .cmp(&a.created_date)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Match-any tag test.
pub(crate) fn has_any_tag(note: &Note, tags: &[Tag]) -> bool {
    note.tags.iter().any(|t| tags.contains(t))
}
