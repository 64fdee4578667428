//! Tag value object for accumulated respondent characteristics.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Normalized label describing one characteristic of a respondent.
///
/// Tags accumulate into a set over the interview and drive bonus points,
/// tier disqualification, and offer matching. Construction normalizes the
/// raw form (trimmed, lowercased, inner whitespace collapsed to underscores)
/// so that `"Word of Mouth"` and `"word_of_mouth"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Creates a Tag, normalizing the input. Returns error if nothing remains.
    pub fn try_new(raw: impl AsRef<str>) -> Result<Self, ValidationError> {
        let normalized = Self::normalize(raw.as_ref());
        if normalized.is_empty() {
            return Err(ValidationError::empty_field("tag"));
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized tag text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn normalize(raw: &str) -> String {
        raw.trim()
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn tag_try_new_lowercases_input() {
        let tag = Tag::try_new("Survival_Mode").unwrap();
        assert_eq!(tag.as_str(), "survival_mode");
    }

    #[test]
    fn tag_try_new_collapses_whitespace_to_underscores() {
        let tag = Tag::try_new("  word  of   mouth ").unwrap();
        assert_eq!(tag.as_str(), "word_of_mouth");
    }

    #[test]
    fn tag_try_new_rejects_empty_input() {
        assert!(Tag::try_new("").is_err());
        assert!(Tag::try_new("   ").is_err());
    }

    #[test]
    fn tag_equality_after_normalization() {
        let a = Tag::try_new("Word of Mouth").unwrap();
        let b = Tag::try_new("word_of_mouth").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn tag_set_deduplicates_normalized_forms() {
        let mut set = BTreeSet::new();
        set.insert(Tag::try_new("Knows Numbers").unwrap());
        set.insert(Tag::try_new("knows_numbers").unwrap());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn tag_serializes_as_plain_string() {
        let tag = Tag::try_new("underpricing").unwrap();
        let json = serde_json::to_string(&tag).unwrap();
        assert_eq!(json, "\"underpricing\"");
    }
}
