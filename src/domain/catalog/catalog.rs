//! Question catalog: ordered categories with fail-fast structural validation.
//!
//! The YAML document deserializes into raw rows first; converting rows into
//! domain types is the only way to obtain a [`Catalog`], so an in-memory
//! catalog is valid by construction and the interview never re-checks it.

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use thiserror::Error;

use crate::domain::foundation::{ChoiceLetter, Tier, ValidationError};

use super::{AnswerOption, Category, FollowUp, FollowUpTrigger, Question};

/// Errors raised while loading or validating a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Catalog must contain at least one category")]
    Empty,

    #[error("Category at position {position}: name cannot be empty")]
    EmptyCategoryName { position: usize },

    #[error("Category '{category}': weight must be a positive number, got {weight}")]
    InvalidWeight { category: String, weight: f64 },

    #[error("Category '{category}': {question} prompt cannot be empty")]
    EmptyPrompt {
        category: String,
        question: &'static str,
    },

    #[error(
        "Category '{category}': {question} must offer {min} to {max} options, got {actual}"
    )]
    OptionCountOutOfRange {
        category: String,
        question: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Category '{category}': {question} option at position {position} is invalid: {source}")]
    InvalidOption {
        category: String,
        question: &'static str,
        position: usize,
        #[source]
        source: ValidationError,
    },

    #[error("Category '{category}': follow-up trigger '{keyword}' is not recognized (use letters or 'any')")]
    InvalidTriggerKeyword { category: String, keyword: String },

    #[error("Category '{category}': follow-up trigger must list at least one letter")]
    EmptyTrigger { category: String },

    #[error("Category '{category}': follow-up trigger letter '{letter}' is not offered by the screener")]
    TriggerLetterNotOffered { category: String, letter: String },

    #[error("Category '{category}': nugget letter '{letter}' is not offered by the screener")]
    NuggetLetterNotOffered { category: String, letter: String },
}

/// The ordered question catalog driving an interview.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Parses and validates a catalog from a YAML document.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for unparseable YAML or any structural rule
    /// violation; the first violation found is reported with its category
    /// coordinates.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let row: CatalogRow = serde_yaml::from_str(yaml)?;
        Self::from_row(row)
    }

    /// Reads, parses, and validates a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` when the file cannot be read, otherwise
    /// the same errors as [`Self::from_yaml_str`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Returns the number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns true if the catalog has no categories.
    ///
    /// Cannot occur for a validated catalog; present for completeness.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Returns the category at the given zero-based position.
    pub fn category(&self, index: usize) -> Option<&Category> {
        self.categories.get(index)
    }

    /// Returns all categories in interview order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    fn from_row(row: CatalogRow) -> Result<Self, CatalogError> {
        if row.categories.is_empty() {
            return Err(CatalogError::Empty);
        }

        let categories = row
            .categories
            .into_iter()
            .enumerate()
            .map(|(position, category)| Self::convert_category(position, category))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { categories })
    }

    fn convert_category(
        position: usize,
        row: CategoryRow,
    ) -> Result<Category, CatalogError> {
        // 1. Name must survive trimming
        let name = row.name.trim().to_string();
        if name.is_empty() {
            return Err(CatalogError::EmptyCategoryName { position });
        }

        // 2. Weight defaults to 1.0 and must be positive and finite
        let weight = row.weight.unwrap_or(Category::DEFAULT_WEIGHT);
        if !(weight.is_finite() && weight > 0.0) {
            return Err(CatalogError::InvalidWeight {
                category: name,
                weight,
            });
        }

        // 3. Screener must be a lettered question
        let screener = Self::convert_question(&name, "screener", row.screener, false)?;
        let offered = screener.letters();

        // 4. Follow-up trigger letters must be offered by the screener
        let follow_up = row
            .follow_up
            .map(|fu| Self::convert_follow_up(&name, fu, &offered))
            .transpose()?;

        // 5. Nugget letters must be offered by the screener
        let mut nuggets = BTreeMap::new();
        for (key, text) in row.nuggets {
            let letter = Self::parse_letter_key(&key).ok_or_else(|| {
                CatalogError::NuggetLetterNotOffered {
                    category: name.clone(),
                    letter: key.clone(),
                }
            })?;
            if !offered.contains(&letter) {
                return Err(CatalogError::NuggetLetterNotOffered {
                    category: name,
                    letter: key,
                });
            }
            nuggets.insert(letter, text);
        }

        Ok(Category::new(name, weight, screener, follow_up, nuggets))
    }

    fn convert_question(
        category: &str,
        kind: &'static str,
        row: QuestionRow,
        allow_free_text: bool,
    ) -> Result<Question, CatalogError> {
        if row.prompt.trim().is_empty() {
            return Err(CatalogError::EmptyPrompt {
                category: category.to_string(),
                question: kind,
            });
        }

        let count = row.options.len();
        let free_text = allow_free_text && count == 0;
        if !free_text && !(Question::MIN_OPTIONS..=Question::MAX_OPTIONS).contains(&count) {
            return Err(CatalogError::OptionCountOutOfRange {
                category: category.to_string(),
                question: kind,
                min: Question::MIN_OPTIONS,
                max: Question::MAX_OPTIONS,
                actual: count,
            });
        }

        let options = row
            .options
            .into_iter()
            .enumerate()
            .map(|(position, option)| {
                AnswerOption::try_new(
                    position,
                    option.label,
                    option.score,
                    option.tags,
                    option.signals,
                )
                .map_err(|source| CatalogError::InvalidOption {
                    category: category.to_string(),
                    question: kind,
                    position,
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Question::new(row.prompt.trim(), options))
    }

    fn convert_follow_up(
        category: &str,
        row: FollowUpRow,
        offered: &BTreeSet<ChoiceLetter>,
    ) -> Result<FollowUp, CatalogError> {
        let trigger = match row.trigger {
            TriggerRow::Keyword(ref keyword) => {
                if keyword.trim().eq_ignore_ascii_case("any") {
                    FollowUpTrigger::Any
                } else {
                    return Err(CatalogError::InvalidTriggerKeyword {
                        category: category.to_string(),
                        keyword: keyword.clone(),
                    });
                }
            }
            TriggerRow::Letters(ref raw) => {
                if raw.is_empty() {
                    return Err(CatalogError::EmptyTrigger {
                        category: category.to_string(),
                    });
                }
                let mut letters = BTreeSet::new();
                for key in raw {
                    let letter = Self::parse_letter_key(key).ok_or_else(|| {
                        CatalogError::TriggerLetterNotOffered {
                            category: category.to_string(),
                            letter: key.clone(),
                        }
                    })?;
                    if !offered.contains(&letter) {
                        return Err(CatalogError::TriggerLetterNotOffered {
                            category: category.to_string(),
                            letter: key.clone(),
                        });
                    }
                    letters.insert(letter);
                }
                FollowUpTrigger::Letters(letters)
            }
        };

        let question = Self::convert_question(category, "follow-up", row.into_question(), true)?;
        Ok(FollowUp::new(trigger, question))
    }

    fn parse_letter_key(key: &str) -> Option<ChoiceLetter> {
        let trimmed = key.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => ChoiceLetter::from_char(c),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────
// Raw document rows
// ─────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
struct CatalogRow {
    #[serde(default)]
    categories: Vec<CategoryRow>,
}

#[derive(Debug, Deserialize)]
struct CategoryRow {
    name: String,
    #[serde(default)]
    weight: Option<f64>,
    screener: QuestionRow,
    #[serde(default)]
    follow_up: Option<FollowUpRow>,
    #[serde(default)]
    nuggets: BTreeMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct QuestionRow {
    prompt: String,
    #[serde(default)]
    options: Vec<OptionRow>,
}

#[derive(Debug, Deserialize)]
struct OptionRow {
    label: String,
    #[serde(default)]
    score: Option<u8>,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    signals: Vec<Tier>,
}

#[derive(Debug, Deserialize)]
struct FollowUpRow {
    trigger: TriggerRow,
    prompt: String,
    #[serde(default)]
    options: Vec<OptionRow>,
}

impl FollowUpRow {
    fn into_question(self) -> QuestionRow {
        QuestionRow {
            prompt: self.prompt,
            options: self.options,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TriggerRow {
    Keyword(String),
    Letters(Vec<String>),
}
