//! Question model
//!
//! `Question` is the persisted record; `NewQuestion` is the insert payload
//! accepted from clients before the store assigns an id.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors raised before a question reaches the store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// A stored trivia question.
///
/// # Fields
///
/// - `id`: Store-assigned identifier (unique, never reused while the row exists)
/// - `question`: Question text
/// - `answer`: Answer text
/// - `category`: Id of the owning category
/// - `difficulty`: Difficulty score (1 = easiest by convention)
///
/// # Examples
///
/// ```rust
/// # use trivia_core::models::Question;
/// let q = Question {
///     id: 5,
///     question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".to_string(),
///     answer: "Maya Angelou".to_string(),
///     category: 4,
///     difficulty: 2,
/// };
/// let json = serde_json::to_value(&q).unwrap();
/// assert_eq!(json["answer"], "Maya Angelou");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

/// Insert payload for a new question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

impl NewQuestion {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: i64,
        difficulty: i64,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category,
            difficulty,
        }
    }

    /// Validate the payload before insertion
    ///
    /// Blank question or answer text counts as a missing field. Category
    /// existence is left to the store's foreign key.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question.trim().is_empty() {
            return Err(ValidationError::MissingField("question".to_string()));
        }

        if self.answer.trim().is_empty() {
            return Err(ValidationError::MissingField("answer".to_string()));
        }

        Ok(())
    }

    /// Attach the store-assigned id
    pub fn into_question(self, id: i64) -> Question {
        Question {
            id,
            question: self.question,
            answer: self.answer,
            category: self.category,
            difficulty: self.difficulty,
        }
    }
}

/// Outcome of a delete-by-id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// Whether a row with that id existed before the delete
    pub existed: bool,
}

impl DeleteResult {
    pub fn from_rows_affected(rows: u64) -> Self {
        Self { existed: rows > 0 }
    }
}
