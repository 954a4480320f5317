//! The note record and its read projections.

use crate::tags::Tag;
use crate::NonEmptyText;
use chrono::{DateTime, Utc};
use notes_uuid::ShardableUuid;
use serde::{Deserialize, Serialize};

/// Identifier of a stored note.
pub type NoteId = ShardableUuid;

/// A persisted note.
///
/// `id` and `created_date` are assigned by the store on insert and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: NoteId,
    pub title: NonEmptyText,
    pub text: NonEmptyText,
    pub created_date: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// A validated note that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: NonEmptyText,
    pub text: NonEmptyText,
    pub tags: Vec<Tag>,
}

/// Caller-supplied fields for create and update.
///
/// Title and text are raw strings here; [`NoteRequest::validate`] enforces that neither is
/// blank. Absent tags mean "no tags".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteRequest {
    pub title: String,
    pub text: String,
    pub tags: Option<Vec<Tag>>,
}

impl NoteRequest {
    pub fn new(title: impl Into<String>, text: impl Into<String>, tags: Option<Vec<Tag>>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            tags,
        }
    }

    /// Checks the non-blank rules and defaults the tag list.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::InvalidInput` naming the first blank field.
    pub fn validate(self) -> crate::NoteResult<NewNote> {
        let title = NonEmptyText::new(self.title)
            .map_err(|_| crate::NoteError::InvalidInput("Title must not be blank".into()))?;
        let text = NonEmptyText::new(self.text)
            .map_err(|_| crate::NoteError::InvalidInput("Text must not be blank".into()))?;

        Ok(NewNote {
            title,
            text,
            tags: self.tags.unwrap_or_default(),
        })
    }
}

/// List-view projection: no text, no tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: NonEmptyText,
    pub created_date: DateTime<Utc>,
}

/// Single-note projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDetail {
    pub id: NoteId,
    pub title: NonEmptyText,
    pub text: NonEmptyText,
    pub created_date: DateTime<Utc>,
    pub tags: Vec<Tag>,
}

impl From<&Note> for NoteSummary {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            created_date: note.created_date,
        }
    }
}

impl From<Note> for NoteDetail {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            text: note.text,
            created_date: note.created_date,
            tags: note.tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoteError;

    #[test]
    fn test_validate_defaults_missing_tags_to_empty() {
        let new_note = NoteRequest::new("Title", "Body", None)
            .validate()
            .expect("should validate");
        assert!(new_note.tags.is_empty());
        assert_eq!(new_note.title.as_str(), "Title");
    }

    #[test]
    fn test_validate_rejects_blank_title_and_text() {
        let err = NoteRequest::new("  ", "Body", None)
            .validate()
            .expect_err("blank title should fail");
        assert!(matches!(err, NoteError::InvalidInput(ref m) if m.contains("Title")));

        let err = NoteRequest::new("Title", "", Some(vec![Tag::Personal]))
            .validate()
            .expect_err("blank text should fail");
        assert!(matches!(err, NoteError::InvalidInput(ref m) if m.contains("Text")));
    }

    #[test]
    fn test_note_yaml_round_trip_keeps_tags_and_date() {
        let note = Note {
            id: NoteId::new(),
            title: NonEmptyText::new("Shopping").unwrap(),
            text: NonEmptyText::new("milk, eggs").unwrap(),
            created_date: Utc::now(),
            tags: vec![Tag::Personal, Tag::Personal],
        };

        let yaml = serde_yaml::to_string(&note).unwrap();
        let parsed: Note = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, note);
    }
}
