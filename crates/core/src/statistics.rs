//! Word-frequency statistics over note text.
//!
//! Normalisation:
//! 1. drop every character that is not an ASCII letter, ASCII digit or whitespace
//!    (so `don't` counts as `dont`, and non-ASCII letters disappear),
//! 2. lowercase,
//! 3. split on whitespace runs, discarding empty tokens.
//!
//! Results are ordered by count descending. Words with equal counts keep the order in which they
//! first appear in the text, so repeated calls on the same text always agree.

use serde::ser::SerializeMap;
use std::collections::HashMap;

/// Whitespace as recognised by the tokeniser: space, tab, newline, vertical tab, form feed and
/// carriage return.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Ordered word → count mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStatistics {
    entries: Vec<(String, u64)>,
}

impl WordStatistics {
    /// Counts the words in `text`.
    ///
    /// Characters other than ASCII letters, digits and whitespace are removed, the rest is
    /// lowercased and split on whitespace.
    ///
    /// # Arguments
    ///
    /// * `text` - The note body
    ///
    /// # Returns
    ///
    /// Words ranked by count, most frequent first; equal counts keep first-occurrence order.
    pub fn from_text(text: &str) -> Self {
        let cleaned: String = text
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || is_separator(*c))
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let mut positions: HashMap<&str, usize> = HashMap::new();
        let mut entries: Vec<(String, u64)> = Vec::new();

        for token in cleaned.split(is_separator).filter(|t| !t.is_empty()) {
            match positions.get(token) {
                Some(&idx) => entries[idx].1 += 1,
                None => {
                    positions.insert(token, entries.len());
                    entries.push((token.to_string(), 1));
                }
            }
        }

        // Stable sort keeps first-occurrence order among equal counts.
        entries.sort_by(|a, b| b.1.cmp(&a.1));

        Self { entries }
    }

    /// Count for `word`, if it occurs.
    pub fn get(&self, word: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(w, _)| w == word)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }
}

impl serde::Serialize for WordStatistics {
    /// Serialises as a map whose key order is the ranking order.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (word, count) in &self.entries {
            map.serialize_entry(word, count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(stats: &WordStatistics) -> Vec<(&str, u64)> {
        stats.iter().collect()
    }

    #[test]
    fn test_counts_simple_sentence() {
        let stats = WordStatistics::from_text("a note is just a note");

        assert_eq!(stats.get("a"), Some(2));
        assert_eq!(stats.get("note"), Some(2));
        assert_eq!(stats.get("is"), Some(1));
        assert_eq!(stats.get("just"), Some(1));
        assert_eq!(
            words(&stats),
            vec![("a", 2), ("note", 2), ("is", 1), ("just", 1)]
        );
    }

    #[test]
    fn test_strips_punctuation_and_lowercases() {
        let stats = WordStatistics::from_text("Don't STOP, don't... stop!");

        assert_eq!(words(&stats), vec![("dont", 2), ("stop", 2)]);
    }

    #[test]
    fn test_non_ascii_letters_are_removed() {
        let stats = WordStatistics::from_text("café café naïve");

        assert_eq!(words(&stats), vec![("caf", 2), ("nave", 1)]);
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        let stats = WordStatistics::from_text("  one\t\ttwo\n\r\none  ");

        assert_eq!(words(&stats), vec![("one", 2), ("two", 1)]);
    }

    #[test]
    fn test_no_countable_tokens_is_empty() {
        assert!(WordStatistics::from_text("!!! ... ???").is_empty());
        assert!(WordStatistics::from_text("").is_empty());
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let stats = WordStatistics::from_text("zeta alpha mid zeta alpha");

        assert_eq!(words(&stats), vec![("zeta", 2), ("alpha", 2), ("mid", 1)]);
        assert_eq!(stats, WordStatistics::from_text("zeta alpha mid zeta alpha"));
    }

    #[test]
    fn test_serializes_as_ordered_json_object() {
        let stats = WordStatistics::from_text("b a b");
        let json = serde_json::to_string(&stats).unwrap();

        assert_eq!(json, r#"{"b":2,"a":1}"#);
    }
}
