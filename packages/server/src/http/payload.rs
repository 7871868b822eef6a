//! Request payloads
//!
//! Every field is optional at the serde level so that missing fields surface
//! as the API's own 400/422 envelopes instead of extractor rejections.

use serde::de::{self, Deserializer};
use serde::Deserialize;
use trivia_core::models::{NewQuestion, ValidationError};
use trivia_core::services::page_from_query;

/// Integer accepted either as a JSON number or as a numeric string
///
/// Browser form selects post category ids and difficulties as strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlexibleInt(pub i64);

impl<'de> Deserialize<'de> for FlexibleInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(i64),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(FlexibleInt(value)),
            Raw::Text(text) => text
                .trim()
                .parse::<i64>()
                .map(FlexibleInt)
                .map_err(|_| de::Error::custom(format!("expected an integer, got {:?}", text))),
        }
    }
}

/// `?page=N`; absent or non-numeric means page 1, numbers below 1 an empty page
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    pub fn page(&self) -> u32 {
        page_from_query(self.page.as_deref())
    }
}

/// Body of `POST /questions`: a search when `searchTerm` is non-empty,
/// otherwise a new question
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsPostBody {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<FlexibleInt>,
    pub difficulty: Option<FlexibleInt>,
}

impl QuestionsPostBody {
    /// Non-empty search term, if this body is a search
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref().filter(|term| !term.is_empty())
    }

    /// Build the insert payload, naming the first missing field
    pub fn into_new_question(self) -> Result<NewQuestion, ValidationError> {
        let missing = |field: &str| ValidationError::MissingField(field.to_string());

        let question = self.question.ok_or_else(|| missing("question"))?;
        let answer = self.answer.ok_or_else(|| missing("answer"))?;
        let FlexibleInt(category) = self.category.ok_or_else(|| missing("category"))?;
        let FlexibleInt(difficulty) = self.difficulty.ok_or_else(|| missing("difficulty"))?;

        Ok(NewQuestion::new(question, answer, category, difficulty))
    }
}

/// `quiz_category` object of `POST /quizzes`
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: Option<FlexibleInt>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Body of `POST /quizzes`
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Option<Vec<i64>>,
    pub quiz_category: Option<QuizCategory>,
}
