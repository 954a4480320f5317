use super::{has_any_tag, sort_newest_first, NoteStore};
use crate::note::{NewNote, Note, NoteId};
use crate::page::{Page, PageRequest};
use crate::tags::Tag;
use crate::{NoteError, NoteResult};
use chrono::Utc;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory note store.
///
/// Used by tests and by the `memory` store kind. Contents are lost when the process exits.
#[derive(Default)]
pub struct MemoryNoteStore {
    notes: RwLock<HashMap<NoteId, Note>>,
    simulate_write_error: AtomicBool,
}

impl MemoryNoteStore {
    /// Creates an empty store with write failures switched off.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent write fail, for exercising internal-failure paths.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.store(simulate, Ordering::SeqCst);
    }

    /// Number of stored notes.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::LockPoisoned` if a writer panicked while holding the map.
    pub fn len(&self) -> NoteResult<usize> {
        Ok(self.read()?.len())
    }

    /// True when no note is stored; see [`MemoryNoteStore::len`] for errors.
    pub fn is_empty(&self) -> NoteResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> NoteResult<RwLockReadGuard<'_, HashMap<NoteId, Note>>> {
        self.notes
            .read()
            .map_err(|_| NoteError::LockPoisoned)
    }

    fn write(&self) -> NoteResult<RwLockWriteGuard<'_, HashMap<NoteId, Note>>> {
        if self.simulate_write_error.load(Ordering::SeqCst) {
            return Err(NoteError::Store("simulated write error".into()));
        }
        self.notes
            .write()
            .map_err(|_| NoteError::LockPoisoned)
    }

    fn collect_page(
        &self,
        request: PageRequest,
        keep: impl Fn(&Note) -> bool,
    ) -> NoteResult<Page<Note>> {
        let mut matching: Vec<Note> = self
            .read()?
            .values()
            .filter(|note| keep(*note))
            .cloned()
            .collect();
        sort_newest_first(&mut matching);
        Ok(Page::from_ordered(matching, request))
    }
}

impl NoteStore for MemoryNoteStore {
    fn insert(&self, note: NewNote) -> NoteResult<Note> {
        let mut notes = self.write()?;

        let mut id = NoteId::new();
        while notes.contains_key(&id) {
            id = NoteId::new();
        }

        let stored = Note {
            id,
            title: note.title,
            text: note.text,
            created_date: Utc::now(),
            tags: note.tags,
        };
        notes.insert(id, stored.clone());
        Ok(stored)
    }

    fn save(&self, note: Note) -> NoteResult<Note> {
        self.write()?.insert(note.id, note.clone());
        Ok(note)
    }

    fn find_by_id(&self, id: &NoteId) -> NoteResult<Option<Note>> {
        Ok(self.read()?.get(id).cloned())
    }

    fn exists_by_id(&self, id: &NoteId) -> NoteResult<bool> {
        Ok(self.read()?.contains_key(id))
    }

    fn delete_by_id(&self, id: &NoteId) -> NoteResult<()> {
        self.write()?.remove(id);
        Ok(())
    }

    fn page(&self, request: PageRequest) -> NoteResult<Page<Note>> {
        self.collect_page(request, |_| true)
    }

    fn page_by_tags(&self, tags: &[Tag], request: PageRequest) -> NoteResult<Page<Note>> {
        self.collect_page(request, |note| has_any_tag(note, tags))
    }
}
