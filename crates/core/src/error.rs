#[derive(Debug, thiserror::Error)]
pub enum NoteError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("note not found: {0}")]
    NotFound(String),

    #[error("failed to create storage directory: {0}")]
    StorageDirCreation(std::io::Error),
    #[error("failed to read note file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write note file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to remove note directory: {0}")]
    FileRemove(std::io::Error),
    #[error("failed to serialize YAML: {0}")]
    YamlSerialization(serde_yaml::Error),
    #[error("failed to deserialize YAML: {0}")]
    YamlDeserialization(serde_yaml::Error),
    #[error("note store lock poisoned")]
    LockPoisoned,
    #[error("note store failure: {0}")]
    Store(String),
}

impl NoteError {
    /// True for failures the caller caused (blank fields, bad paging, missing ids).
    ///
    /// Everything else is an internal failure of the store.
    pub fn is_client_error(&self) -> bool {
        matches!(self, NoteError::InvalidInput(_) | NoteError::NotFound(_))
    }
}

pub type NoteResult<T> = std::result::Result<T, NoteError>;
