//! Business Services
//!
//! - [`pagination`] - 1-indexed page slicing
//! - [`quiz`] - Random unseen-question picker
//! - [`TriviaService`] - One operation per HTTP endpoint, written against `TriviaStore`

mod error;
pub mod pagination;
pub mod quiz;
mod trivia_service;

pub use error::TriviaServiceError;
pub use pagination::{page_from_query, paginate, QUESTIONS_PER_PAGE};
pub use quiz::{pick, pick_with, system_selector, IndexSelector, Pick, ALL_CATEGORIES};
pub use trivia_service::{
    CategoriesResponse, CategoryQuestionsResponse, CreatedQuestionResponse,
    DeletedQuestionResponse, QuestionsPageResponse, QuizResponse, SearchResponse, TriviaService,
};
