//! Note tags and tag-filter parsing.
//!
//! Tags are a deliberately *closed* set of category labels. Anything outside the set is rejected
//! on create/update (by deserialisation) and on listing (by [`parse_tag_filter`]).

use crate::{NoteError, NoteResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category label attached to a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "UPPERCASE")]
pub enum Tag {
    Personal,
    Business,
    Important,
}

impl Tag {
    /// Every tag, in declaration order.
    pub const ALL: [Tag; 3] = [Tag::Personal, Tag::Business, Tag::Important];

    /// Returns the wire label for this tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Personal => "PERSONAL",
            Tag::Business => "BUSINESS",
            Tag::Important => "IMPORTANT",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tag {
    type Err = NoteError;

    /// Parses an exact uppercase label. Callers wanting lenient parsing should go through
    /// [`parse_tag_filter`].
    fn from_str(s: &str) -> NoteResult<Self> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| NoteError::InvalidInput(format!("unknown tag: '{}'", s)))
    }
}

/// Parses a raw comma-separated tag filter such as `"personal, Business"`.
///
/// Each token is trimmed and uppercased before matching. Trailing empty tokens (`"personal,"`)
/// are ignored, but an empty token between two commas counts as unknown. If *any* token is not a
/// known tag the whole filter is dropped and an empty list is returned, which callers treat as
/// "no filter".
///
/// # Arguments
///
/// * `raw` - The query value as received, if any
///
/// # Returns
///
/// The requested tags in input order, or an empty list for a missing, blank or invalid filter.
pub fn parse_tag_filter(raw: Option<&str>) -> Vec<Tag> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Vec::new();
    };

    let parsed: NoteResult<Vec<Tag>> = raw
        .trim_end_matches(',')
        .split(',')
        .map(|token| token.trim().to_uppercase().parse::<Tag>())
        .collect();

    match parsed {
        Ok(tags) => tags,
        Err(e) => {
            tracing::warn!("ignoring tag filter '{}': {}", raw, e);
            Vec::new()
        }
    }
}
