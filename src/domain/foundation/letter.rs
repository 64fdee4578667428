//! Choice letter value object for lettered answer options (A-E).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Letter identifying an answer option within a question (A through E).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChoiceLetter {
    A,
    B,
    C,
    D,
    E,
}

impl ChoiceLetter {
    /// All letters in option order.
    pub const ALL: [ChoiceLetter; 5] = [
        ChoiceLetter::A,
        ChoiceLetter::B,
        ChoiceLetter::C,
        ChoiceLetter::D,
        ChoiceLetter::E,
    ];

    /// Creates a ChoiceLetter from a character, case-insensitive.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(ChoiceLetter::A),
            'B' => Some(ChoiceLetter::B),
            'C' => Some(ChoiceLetter::C),
            'D' => Some(ChoiceLetter::D),
            'E' => Some(ChoiceLetter::E),
            _ => None,
        }
    }

    /// Creates a ChoiceLetter from a zero-based option position.
    pub fn try_from_index(index: usize) -> Result<Self, ValidationError> {
        Self::ALL.get(index).copied().ok_or_else(|| {
            ValidationError::out_of_range("option_index", 0, 4, index as i32)
        })
    }

    /// Returns the zero-based position of this letter.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Returns the uppercase character for this letter.
    pub fn as_char(&self) -> char {
        match self {
            ChoiceLetter::A => 'A',
            ChoiceLetter::B => 'B',
            ChoiceLetter::C => 'C',
            ChoiceLetter::D => 'D',
            ChoiceLetter::E => 'E',
        }
    }
}

impl fmt::Display for ChoiceLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_letter_from_char_accepts_uppercase() {
        assert_eq!(ChoiceLetter::from_char('A'), Some(ChoiceLetter::A));
        assert_eq!(ChoiceLetter::from_char('E'), Some(ChoiceLetter::E));
    }

    #[test]
    fn choice_letter_from_char_accepts_lowercase() {
        assert_eq!(ChoiceLetter::from_char('b'), Some(ChoiceLetter::B));
        assert_eq!(ChoiceLetter::from_char('d'), Some(ChoiceLetter::D));
    }

    #[test]
    fn choice_letter_from_char_rejects_other_characters() {
        assert_eq!(ChoiceLetter::from_char('F'), None);
        assert_eq!(ChoiceLetter::from_char('1'), None);
        assert_eq!(ChoiceLetter::from_char(' '), None);
        assert_eq!(ChoiceLetter::from_char('é'), None);
    }

    #[test]
    fn choice_letter_try_from_index_covers_option_range() {
        assert_eq!(ChoiceLetter::try_from_index(0).unwrap(), ChoiceLetter::A);
        assert_eq!(ChoiceLetter::try_from_index(4).unwrap(), ChoiceLetter::E);
        assert!(ChoiceLetter::try_from_index(5).is_err());
    }

    #[test]
    fn choice_letter_index_matches_position() {
        for (i, letter) in ChoiceLetter::ALL.iter().enumerate() {
            assert_eq!(letter.index(), i);
        }
    }

    #[test]
    fn choice_letter_ordering_follows_alphabet() {
        assert!(ChoiceLetter::A < ChoiceLetter::B);
        assert!(ChoiceLetter::D < ChoiceLetter::E);
    }

    #[test]
    fn choice_letter_displays_as_uppercase() {
        assert_eq!(format!("{}", ChoiceLetter::C), "C");
    }

    #[test]
    fn choice_letter_serializes_to_json() {
        let json = serde_json::to_string(&ChoiceLetter::B).unwrap();
        assert_eq!(json, "\"B\"");
    }

    #[test]
    fn choice_letter_deserializes_from_json() {
        let letter: ChoiceLetter = serde_json::from_str("\"E\"").unwrap();
        assert_eq!(letter, ChoiceLetter::E);
    }
}
