//! File-backed note store.
//!
//! ## Storage Layout
//!
//! ```text
//! <data_dir>/notes/
//!   <s1>/
//!     <s2>/
//!       <id>/
//!         note.yaml
//! ```
//!
//! where `s1` and `s2` are the first four hex characters of the note id. Each write goes to its own
//! uniquely named temporary file in the note directory and is then renamed over `note.yaml`, so
//! readers see either the old or the new record and never a partial one. Concurrent saves of one
//! note never share a temporary file; the last rename wins.

use super::{has_any_tag, sort_newest_first, NoteStore};
use crate::constants::{NOTES_DIR_NAME, NOTE_YAML_FILENAME};
use crate::note::{NewNote, Note, NoteId};
use crate::page::{Page, PageRequest};
use crate::tags::Tag;
use crate::{NoteError, NoteResult};
use chrono::Utc;
use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const MAX_ID_ATTEMPTS: usize = 5;
const MAX_WRITE_ATTEMPTS: usize = 5;

/// Note store keeping one YAML document per note under a sharded directory tree.
#[derive(Clone, Debug)]
pub struct FileNoteStore {
    notes_dir: PathBuf,
}

impl FileNoteStore {
    /// Opens (creating if needed) the store rooted at `data_dir`.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::StorageDirCreation` if the notes directory cannot be created.
    pub fn open(data_dir: &Path) -> NoteResult<Self> {
        let notes_dir = data_dir.join(NOTES_DIR_NAME);
        fs::create_dir_all(&notes_dir).map_err(NoteError::StorageDirCreation)?;
        Ok(Self { notes_dir })
    }

    /// Returns the root of the sharded note tree.
    ///
    /// # Returns
    ///
    /// The `<data_dir>/notes` directory this store was opened on.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    fn note_path(&self, id: &NoteId) -> PathBuf {
        id.sharded_dir(&self.notes_dir).join(NOTE_YAML_FILENAME)
    }

    fn write_note(&self, note: &Note) -> NoteResult<()> {
        let dir = note.id.sharded_dir(&self.notes_dir);
        let yaml = serde_yaml::to_string(note).map_err(NoteError::YamlSerialization)?;

        let mut attempt = 1;
        loop {
            match Self::replace_note_file(&dir, yaml.as_bytes()) {
                Ok(()) => break,
                // A concurrent delete removed the directory mid-write; recreate it and retry.
                Err(e) if e.kind() == ErrorKind::NotFound && attempt < MAX_WRITE_ATTEMPTS => {
                    tracing::debug!("note {} directory vanished during write, retrying", note.id);
                    attempt += 1;
                }
                Err(e) => return Err(NoteError::FileWrite(e)),
            }
        }

        tracing::debug!("wrote note {}", note.id);
        Ok(())
    }

    /// Writes `contents` to a fresh temporary file in `dir` and renames it over `note.yaml`.
    fn replace_note_file(dir: &Path, contents: &[u8]) -> io::Result<()> {
        fs::create_dir_all(dir)?;
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(contents)?;
        tmp.persist(dir.join(NOTE_YAML_FILENAME)).map_err(|e| e.error)?;
        Ok(())
    }

    fn read_note(path: &Path) -> NoteResult<Option<Note>> {
        match fs::read_to_string(path) {
            Ok(contents) => serde_yaml::from_str(&contents)
                .map(Some)
                .map_err(NoteError::YamlDeserialization),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(NoteError::FileRead(e)),
        }
    }

    /// Walks `<s1>/<s2>/<id>/note.yaml` and returns every readable note.
    ///
    /// Files that cannot be read or parsed are logged and skipped.
    fn load_all(&self) -> NoteResult<Vec<Note>> {
        let mut notes = Vec::new();

        let s1_iter = match fs::read_dir(&self.notes_dir) {
            Ok(it) => it,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(notes),
            Err(e) => return Err(NoteError::FileRead(e)),
        };

        for s1 in s1_iter.flatten() {
            let Ok(s2_iter) = fs::read_dir(s1.path()) else {
                continue;
            };
            for s2 in s2_iter.flatten() {
                let Ok(id_iter) = fs::read_dir(s2.path()) else {
                    continue;
                };
                for id_ent in id_iter.flatten() {
                    let note_path = id_ent.path().join(NOTE_YAML_FILENAME);
                    match Self::read_note(&note_path) {
                        Ok(Some(note)) => notes.push(note),
                        Ok(None) => {}
                        Err(e) => {
                            tracing::warn!(
                                "skipping unreadable note: {} - {}",
                                note_path.display(),
                                e
                            );
                        }
                    }
                }
            }
        }

        Ok(notes)
    }

    fn collect_page(
        &self,
        request: PageRequest,
        keep: impl Fn(&Note) -> bool,
    ) -> NoteResult<Page<Note>> {
        let mut matching: Vec<Note> = self
            .load_all()?
            .into_iter()
            .filter(|note| keep(note))
            .collect();
        sort_newest_first(&mut matching);
        Ok(Page::from_ordered(matching, request))
    }
}

impl NoteStore for FileNoteStore {
    fn insert(&self, note: NewNote) -> NoteResult<Note> {
        // Guard against collisions with an existing directory.
        let id = (0..MAX_ID_ATTEMPTS)
            .map(|_| NoteId::new())
            .find(|id| !id.sharded_dir(&self.notes_dir).exists())
            .ok_or_else(|| {
                NoteError::Store(format!(
                    "could not allocate a free note id after {} attempts",
                    MAX_ID_ATTEMPTS
                ))
            })?;

        let stored = Note {
            id,
            title: note.title,
            text: note.text,
            created_date: Utc::now(),
            tags: note.tags,
        };
        self.write_note(&stored)?;
        Ok(stored)
    }

    fn save(&self, note: Note) -> NoteResult<Note> {
        self.write_note(&note)?;
        Ok(note)
    }

    fn find_by_id(&self, id: &NoteId) -> NoteResult<Option<Note>> {
        Self::read_note(&self.note_path(id))
    }

    fn exists_by_id(&self, id: &NoteId) -> NoteResult<bool> {
        Ok(self.note_path(id).is_file())
    }

    fn delete_by_id(&self, id: &NoteId) -> NoteResult<()> {
        let dir = id.sharded_dir(&self.notes_dir);

        let mut attempt = 1;
        loop {
            match fs::remove_dir_all(&dir) {
                Ok(()) => {
                    tracing::debug!("removed note {}", id);
                    return Ok(());
                }
                Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
                // A concurrent save dropped a temporary file in while the tree was being removed.
                Err(e)
                    if e.kind() == ErrorKind::DirectoryNotEmpty && attempt < MAX_WRITE_ATTEMPTS =>
                {
                    attempt += 1;
                }
                Err(e) => return Err(NoteError::FileRemove(e)),
            }
        }
    }

    fn page(&self, request: PageRequest) -> NoteResult<Page<Note>> {
        self.collect_page(request, |_| true)
    }

    fn page_by_tags(&self, tags: &[Tag], request: PageRequest) -> NoteResult<Page<Note>> {
        self.collect_page(request, |note| has_any_tag(note, tags))
    }
}
