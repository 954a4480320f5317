//! Validated text types shared across the notes workspace.

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("text cannot be blank")]
    Blank,
}

/// A string type that guarantees at least one non-whitespace character.
///
/// Unlike a trimming constructor, the original input is kept verbatim so that a
/// note read back from the store is byte-for-byte what the caller wrote.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Blank` if the input is empty or whitespace only.
    pub fn new(input: impl Into<String>) -> Result<Self, TextError> {
        let input = input.into();
        if input.trim().is_empty() {
            return Err(TextError::Blank);
        }
        Ok(Self(input))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for NonEmptyText {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(NonEmptyText::new(""), Err(TextError::Blank));
        assert_eq!(NonEmptyText::new(" \t\n "), Err(TextError::Blank));
    }

    #[test]
    fn test_keeps_input_verbatim() {
        let text = NonEmptyText::new("  padded title ").expect("should accept");
        assert_eq!(text.as_str(), "  padded title ");
    }

    #[test]
    fn test_deserialize_rejects_blank() {
        let err = serde_json::from_str::<NonEmptyText>("\"   \"")
            .expect_err("blank string should not deserialize");
        assert!(err.to_string().contains("blank"));

        let ok: NonEmptyText = serde_json::from_str("\"hello\"").expect("should deserialize");
        assert_eq!(ok.as_str(), "hello");
    }
}
