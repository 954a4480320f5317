//! Constants used throughout the notes core crate.

/// Directory name for note records under the data directory.
pub const NOTES_DIR_NAME: &str = "notes";

/// Default directory for note data when no explicit directory is configured.
pub const DEFAULT_NOTE_DATA_DIR: &str = "note_data";

/// Filename of the YAML document holding a single note.
pub const NOTE_YAML_FILENAME: &str = "note.yaml";

/// Page size used when a listing request does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Largest page a single listing request may ask for.
pub const MAX_PAGE_SIZE: u32 = 1000;
