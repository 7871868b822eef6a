//! TriviaStore Trait - Database Abstraction Layer
//!
//! This module defines the `TriviaStore` trait that abstracts persistence of
//! questions and categories. `TriviaService` depends only on this trait, so the
//! backend (libsql today) can be swapped or stubbed without touching business
//! logic.
//!
//! # Design Decisions
//!
//! 1. **Async-First**: All methods are async
//! 2. **Simple predicates**: Every method is a single query (by id, by
//!    category, by substring, or full listing)
//! 3. **Error Handling**: Uses `anyhow::Result` for flexible error context
//!
//! # Examples
//!
//! ```rust,no_run
//! use trivia_core::db::{DatabaseService, TriviaStore, TursoStore};
//! use trivia_core::models::NewQuestion;
//! use std::path::PathBuf;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let db = Arc::new(DatabaseService::new(PathBuf::from("./data/trivia.db")).await?);
//!     let store: Arc<dyn TriviaStore> = Arc::new(TursoStore::new(db));
//!
//!     let science = store.create_category("Science").await?;
//!     let created = store
//!         .create_question(NewQuestion::new("What is H2O?", "Water", science.id, 1))
//!         .await?;
//!     assert!(store.get_question(created.id).await?.is_some());
//!
//!     Ok(())
//! }
//! ```

use crate::models::{Category, DeleteResult, NewQuestion, Question};
use anyhow::Result;
use async_trait::async_trait;

/// Abstraction layer for question and category persistence
///
/// Implementations must be `Send + Sync` so a single store can be shared
/// across request handlers.
///
/// # Ordering
///
/// Every method returning several questions orders them by difficulty,
/// ties broken by id.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    //
    // CATEGORIES
    //

    /// All categories ordered by id
    async fn list_categories(&self) -> Result<Vec<Category>>;

    /// Category by id, `None` when absent
    async fn get_category(&self, id: i64) -> Result<Option<Category>>;

    /// Insert a category and return it with its assigned id
    async fn create_category(&self, kind: &str) -> Result<Category>;

    /// Delete a category and, through the foreign key, its questions
    async fn delete_category(&self, id: i64) -> Result<DeleteResult>;

    //
    // QUESTIONS
    //

    /// All questions
    async fn list_questions(&self) -> Result<Vec<Question>>;

    /// Question by id, `None` when absent
    async fn get_question(&self, id: i64) -> Result<Option<Question>>;

    /// Questions whose `category` equals `category_id`
    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>>;

    /// Questions whose text contains `term`, ignoring case
    ///
    /// `term` is matched literally; `%` and `_` carry no wildcard meaning.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>>;

    /// Insert a question and return it with its assigned id
    ///
    /// # Errors
    ///
    /// Fails when the insert is rejected, e.g. `category` names no category.
    async fn create_question(&self, question: NewQuestion) -> Result<Question>;

    /// Delete a question by id
    async fn delete_question(&self, id: i64) -> Result<DeleteResult>;
}
