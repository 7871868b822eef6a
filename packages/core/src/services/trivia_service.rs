//! Trivia Service - Business Logic Layer
//!
//! One method per HTTP operation. Each performs a single store query (plus a
//! category lookup where the response needs it), paginates listings, and
//! returns a serializable response or a `TriviaServiceError`.
//!
//! # Examples
//!
//! ```rust,no_run
//! use trivia_core::db::{DatabaseService, TursoStore};
//! use trivia_core::services::TriviaService;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let db = Arc::new(DatabaseService::new(PathBuf::from("./data/trivia.db")).await?);
//! let service = TriviaService::new(Arc::new(TursoStore::new(db)));
//!
//! let page = service.questions_page(1).await?;
//! println!("{} questions in total", page.total_questions);
//! # Ok(())
//! # }
//! ```

use crate::db::TriviaStore;
use crate::models::{category_map, CategoryMap, NewQuestion, Question};
use crate::services::error::TriviaServiceError;
use crate::services::pagination::{paginate, QUESTIONS_PER_PAGE};
use crate::services::quiz::{pick_with, system_selector, IndexSelector, ALL_CATEGORIES};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

type Result<T> = std::result::Result<T, TriviaServiceError>;

/// `GET /categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// `GET /questions?page=N`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionsPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub categories: CategoryMap,
    /// Always `null`: the full listing spans every category
    pub current_category: Option<i64>,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedQuestionResponse {
    pub success: bool,
    pub deleted: i64,
}

/// `POST /questions` with `searchTerm`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: Option<i64>,
}

/// `POST /questions` with a new question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedQuestionResponse {
    pub success: bool,
    pub created: i64,
    pub question_created: String,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

/// `GET /categories/{id}/questions`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: usize,
    pub current_category: i64,
}

/// `POST /quizzes`; `question` is `null` once the pool is exhausted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// Trivia operations over a `TriviaStore`
pub struct TriviaService {
    store: Arc<dyn TriviaStore>,
    selector: IndexSelector,
}

impl TriviaService {
    /// Service using system randomness for quiz picks
    pub fn new(store: Arc<dyn TriviaStore>) -> Self {
        Self::with_selector(store, system_selector())
    }

    /// Service with an injected quiz selector (deterministic in tests)
    pub fn with_selector(store: Arc<dyn TriviaStore>, selector: IndexSelector) -> Self {
        Self { store, selector }
    }

    pub fn store(&self) -> &Arc<dyn TriviaStore> {
        &self.store
    }

    async fn category_map(&self) -> Result<CategoryMap> {
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(TriviaServiceError::Store)?;
        Ok(category_map(&categories))
    }

    /// All categories as an `id -> type` mapping
    ///
    /// # Errors
    ///
    /// `NotFound` when no categories exist.
    pub async fn categories(&self) -> Result<CategoriesResponse> {
        let categories = self.category_map().await?;

        if categories.is_empty() {
            return Err(TriviaServiceError::not_found("no categories"));
        }

        tracing::debug!("Listing {} categories", categories.len());

        Ok(CategoriesResponse {
            success: true,
            categories,
        })
    }

    /// One page of all questions, with the category mapping
    ///
    /// # Errors
    ///
    /// `NotFound` when the page is empty.
    pub async fn questions_page(&self, page: u32) -> Result<QuestionsPageResponse> {
        let questions = self
            .store
            .list_questions()
            .await
            .map_err(TriviaServiceError::Store)?;

        let page_questions = paginate(page, QUESTIONS_PER_PAGE, &questions);
        if page_questions.is_empty() {
            return Err(TriviaServiceError::not_found(format!(
                "page {} of questions is empty",
                page
            )));
        }

        Ok(QuestionsPageResponse {
            success: true,
            questions: page_questions,
            total_questions: questions.len(),
            categories: self.category_map().await?,
            current_category: None,
        })
    }

    /// Delete a question by id
    ///
    /// # Errors
    ///
    /// - `BadRequest` when no question has that id
    /// - `Unprocessable` when the store fails to delete
    pub async fn delete_question(&self, id: i64) -> Result<DeletedQuestionResponse> {
        let result = self.store.delete_question(id).await.map_err(|e| {
            tracing::error!("Failed to delete question {}: {:#}", id, e);
            TriviaServiceError::unprocessable(format!("could not delete question {}", id))
        })?;

        if !result.existed {
            return Err(TriviaServiceError::bad_request(format!(
                "question {} does not exist",
                id
            )));
        }

        tracing::info!("Deleted question {}", id);

        Ok(DeletedQuestionResponse {
            success: true,
            deleted: id,
        })
    }

    /// Questions containing `term` (case-insensitive), paginated
    ///
    /// # Errors
    ///
    /// `NotFound` when nothing matches or the page is empty.
    pub async fn search_questions(&self, term: &str, page: u32) -> Result<SearchResponse> {
        let matches = self
            .store
            .search_questions(term)
            .await
            .map_err(TriviaServiceError::Store)?;

        let page_questions = paginate(page, QUESTIONS_PER_PAGE, &matches);
        if page_questions.is_empty() {
            return Err(TriviaServiceError::not_found(format!(
                "no questions match '{}' on page {}",
                term, page
            )));
        }

        tracing::debug!("Search '{}' matched {} questions", term, matches.len());

        Ok(SearchResponse {
            success: true,
            questions: page_questions,
            total_questions: matches.len(),
            current_category: None,
        })
    }

    /// Insert a question and return the requested page of the updated listing
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` when question or answer text is blank
    /// - `Unprocessable` when the store rejects the insert
    pub async fn create_question(
        &self,
        new_question: NewQuestion,
        page: u32,
    ) -> Result<CreatedQuestionResponse> {
        new_question.validate()?;

        let created = self
            .store
            .create_question(new_question)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create question: {:#}", e);
                TriviaServiceError::unprocessable("could not create question")
            })?;

        tracing::info!(
            "Created question {} in category {}",
            created.id,
            created.category
        );

        let questions = self
            .store
            .list_questions()
            .await
            .map_err(TriviaServiceError::Store)?;

        Ok(CreatedQuestionResponse {
            success: true,
            created: created.id,
            question_created: created.question,
            questions: paginate(page, QUESTIONS_PER_PAGE, &questions),
            total_questions: questions.len(),
        })
    }

    /// One page of the questions in a category
    ///
    /// # Errors
    ///
    /// - `BadRequest` when the category does not exist
    /// - `NotFound` when the page is empty
    pub async fn category_questions(
        &self,
        category_id: i64,
        page: u32,
    ) -> Result<CategoryQuestionsResponse> {
        let category = self
            .store
            .get_category(category_id)
            .await
            .map_err(TriviaServiceError::Store)?;

        if category.is_none() {
            return Err(TriviaServiceError::bad_request(format!(
                "category {} does not exist",
                category_id
            )));
        }

        let questions = self
            .store
            .questions_in_category(category_id)
            .await
            .map_err(TriviaServiceError::Store)?;

        let page_questions = paginate(page, QUESTIONS_PER_PAGE, &questions);
        if page_questions.is_empty() {
            return Err(TriviaServiceError::not_found(format!(
                "page {} of category {} is empty",
                page, category_id
            )));
        }

        Ok(CategoryQuestionsResponse {
            success: true,
            questions: page_questions,
            total_questions: questions.len(),
            current_category: category_id,
        })
    }

    /// Next quiz question not in `previous_questions`
    ///
    /// `category_id` of [`ALL_CATEGORIES`] draws from every question.
    ///
    /// # Errors
    ///
    /// `NotFound` when the pool is empty (unknown or empty category).
    pub async fn next_quiz_question(
        &self,
        previous_questions: &[i64],
        category_id: i64,
    ) -> Result<QuizResponse> {
        let pool = if category_id == ALL_CATEGORIES {
            self.store.list_questions().await
        } else {
            self.store.questions_in_category(category_id).await
        }
        .map_err(TriviaServiceError::Store)?;

        if pool.is_empty() {
            return Err(TriviaServiceError::not_found(format!(
                "no quiz questions in category {}",
                category_id
            )));
        }

        let previous: HashSet<i64> = previous_questions.iter().copied().collect();
        let question = pick_with(pool, &previous, &self.selector).into_question();

        match &question {
            Some(q) => tracing::debug!("Quiz served question {}", q.id),
            None => tracing::debug!("Quiz pool for category {} exhausted", category_id),
        }

        Ok(QuizResponse {
            success: true,
            question,
        })
    }
}
