//! Note service: CRUD orchestration, tag-filtered listing and word statistics.
//!
//! The service is stateless. It holds a store handle and nothing else, so it is cheap to clone
//! into every request handler.
//!
//! ## Concurrency contract
//!
//! Each call is one or two synchronous store round trips. Two sequences are read-then-write and
//! are **not** atomic at this layer:
//!
//! - [`NoteService::delete_note`] checks existence, then deletes. If another caller deletes the
//!   same note in between, the second delete is a no-op and both callers are told it succeeded.
//! - [`NoteService::update_note`] fetches, then saves. There is no version check: a concurrent
//!   update is overwritten (last write wins) and a concurrent delete is undone by the save.
//!
//! The only mutating store calls are `insert`, `save` and `delete_by_id`, each atomic for one
//! record, so an abandoned call can never leave a partially written note.

use crate::note::{Note, NoteDetail, NoteId, NoteRequest, NoteSummary};
use crate::page::{Page, PageRequest};
use crate::statistics::WordStatistics;
use crate::store::NoteStore;
use crate::tags::Tag;
use crate::{NoteError, NoteResult};
use std::sync::Arc;

/// Note use cases over a shared [`NoteStore`].
///
/// Cloning is cheap; every clone talks to the same store.
#[derive(Clone)]
pub struct NoteService {
    store: Arc<dyn NoteStore>,
}

impl NoteService {
    /// Creates a service backed by `store`.
    ///
    /// # Arguments
    ///
    /// * `store` - The engine chosen at startup, usually from [`crate::CoreConfig::open_store`]
    pub fn new(store: Arc<dyn NoteStore>) -> Self {
        Self { store }
    }

    /// Creates a note from `request`.
    ///
    /// # Arguments
    ///
    /// * `request` - Title, text and optional tags as supplied by the caller
    ///
    /// # Returns
    ///
    /// The stored note, including its new id and `created_date`.
    ///
    /// # Errors
    ///
    /// - `NoteError::InvalidInput` if the title or text is blank; nothing is stored.
    /// - Any store error from the insert.
    pub fn create_note(&self, request: NoteRequest) -> NoteResult<Note> {
        let new_note = request.validate()?;
        let note = self.store.insert(new_note)?;
        tracing::info!("created note {}", note.id);
        Ok(note)
    }

    /// Lists one page of note summaries, newest first.
    ///
    /// An empty `tags` slice means no filter; otherwise a note is listed when it carries at least
    /// one of the tags.
    pub fn list_notes(&self, request: PageRequest, tags: &[Tag]) -> NoteResult<Page<NoteSummary>> {
        let notes = if tags.is_empty() {
            self.store.page(request)?
        } else {
            self.store.page_by_tags(tags, request)?
        };
        Ok(notes.map(|note| NoteSummary::from(&note)))
    }

    /// # Errors
    ///
    /// `NoteError::NotFound` if no note has this id.
    pub fn get_note(&self, id: &str) -> NoteResult<NoteDetail> {
        self.find(id).map(NoteDetail::from)
    }

    /// Replaces title, text and tags of an existing note wholesale.
    ///
    /// Absent tags clear the tag list. `id` and `created_date` are kept.
    ///
    /// # Errors
    ///
    /// - `NoteError::InvalidInput` if the title or text is blank.
    /// - `NoteError::NotFound` if no note has this id; the store is not touched.
    pub fn update_note(&self, id: &str, request: NoteRequest) -> NoteResult<Note> {
        let replacement = request.validate()?;
        let existing = self.find(id)?;

        let updated = self.store.save(Note {
            id: existing.id,
            title: replacement.title,
            text: replacement.text,
            created_date: existing.created_date,
            tags: replacement.tags,
        })?;
        tracing::info!("updated note {}", updated.id);
        Ok(updated)
    }

    /// # Errors
    ///
    /// `NoteError::NotFound` if no note has this id.
    pub fn delete_note(&self, id: &str) -> NoteResult<()> {
        let note_id = parse_id(id)?;
        if !self.store.exists_by_id(&note_id)? {
            return Err(NoteError::NotFound(id.to_string()));
        }
        self.store.delete_by_id(&note_id)?;
        tracing::info!("deleted note {}", note_id);
        Ok(())
    }

    /// Word frequencies of the note's text.
    ///
    /// A note whose text has no countable words yields `Ok` with an empty result, which is
    /// distinct from the `NotFound` error for a missing note.
    pub fn word_statistics(&self, id: &str) -> NoteResult<WordStatistics> {
        let note = self.find(id)?;
        Ok(WordStatistics::from_text(note.text.as_str()))
    }

    fn find(&self, id: &str) -> NoteResult<Note> {
        let note_id = parse_id(id)?;
        self.store
            .find_by_id(&note_id)?
            .ok_or_else(|| NoteError::NotFound(id.to_string()))
    }
}

/// A string that is not a canonical id cannot name a stored note.
fn parse_id(id: &str) -> NoteResult<NoteId> {
    NoteId::parse(id).map_err(|_| NoteError::NotFound(id.to_string()))
}
