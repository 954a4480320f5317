//! JSON shapes of the notes API and conversions from core types.

use chrono::{DateTime, Utc};
use notes_core::{Note, NoteDetail, NoteRequest, NoteSummary, Page, Tag};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of create and update requests.
///
/// Title and text must not be blank. Missing `tags` means no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NoteReq {
    #[schema(example = "My first note")]
    pub title: String,
    #[schema(example = "This is note text")]
    pub text: String,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

impl From<NoteReq> for NoteRequest {
    fn from(req: NoteReq) -> Self {
        NoteRequest::new(req.title, req.text, req.tags)
    }
}

/// A full note, as returned by get, create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteRes {
    pub id: String,
    pub title: String,
    pub text: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_date: DateTime<Utc>,
    pub tags: Vec<Tag>,
}

impl From<Note> for NoteRes {
    fn from(note: Note) -> Self {
        NoteDetail::from(note).into()
    }
}

impl From<NoteDetail> for NoteRes {
    fn from(detail: NoteDetail) -> Self {
        Self {
            id: detail.id.to_string(),
            title: detail.title.into_inner(),
            text: detail.text.into_inner(),
            created_date: detail.created_date,
            tags: detail.tags,
        }
    }
}

/// List entry: no text, no tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteSummaryRes {
    pub id: String,
    pub title: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_date: DateTime<Utc>,
}

impl From<NoteSummary> for NoteSummaryRes {
    fn from(summary: NoteSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title.into_inner(),
            created_date: summary.created_date,
        }
    }
}

/// One page of the note listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotePageRes {
    pub content: Vec<NoteSummaryRes>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl From<Page<NoteSummary>> for NotePageRes {
    fn from(page: Page<NoteSummary>) -> Self {
        Self {
            content: page.content.into_iter().map(Into::into).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}

/// Error body for 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}
