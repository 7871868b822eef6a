//! TursoStore - TriviaStore Implementation for the libsql Backend
//!
//! Thin wrapper around `DatabaseService`: SQL lives in the `db_*` methods,
//! this layer only converts `libsql::Row`s into models.

use crate::db::trivia_store::TriviaStore;
use crate::db::{DatabaseService, DbCreateQuestionParams};
use crate::models::{Category, DeleteResult, NewQuestion, Question};
use anyhow::{Context, Result};
use async_trait::async_trait;
use libsql::Row;
use std::sync::Arc;

/// TursoStore implements TriviaStore for the libsql backend
pub struct TursoStore {
    db: Arc<DatabaseService>,
}

impl TursoStore {
    pub fn new(db: Arc<DatabaseService>) -> Self {
        Self { db }
    }

    /// Underlying database service
    pub fn database(&self) -> &Arc<DatabaseService> {
        &self.db
    }

    /// Convert a `(id, type)` row to Category
    fn row_to_category(row: &Row) -> Result<Category> {
        let id: i64 = row.get(0).context("Failed to get id")?;
        let kind: String = row.get(1).context("Failed to get type")?;
        Ok(Category { id, kind })
    }

    /// Convert a question row to Question
    ///
    /// # Row Format
    ///
    /// - id (INTEGER)
    /// - question (TEXT)
    /// - answer (TEXT)
    /// - category (INTEGER)
    /// - difficulty (INTEGER)
    fn row_to_question(row: &Row) -> Result<Question> {
        Ok(Question {
            id: row.get(0).context("Failed to get id")?,
            question: row.get(1).context("Failed to get question")?,
            answer: row.get(2).context("Failed to get answer")?,
            category: row.get(3).context("Failed to get category")?,
            difficulty: row.get(4).context("Failed to get difficulty")?,
        })
    }

    /// Rows must be converted as they are stepped; a Row does not outlive the next step.
    async fn collect_questions(mut rows: libsql::Rows) -> Result<Vec<Question>> {
        let mut questions = Vec::new();
        while let Some(row) = rows.next().await.context("Failed to read question row")? {
            questions.push(Self::row_to_question(&row)?);
        }
        Ok(questions)
    }

    /// Substring test ignoring case, with Unicode lowercasing on both sides
    ///
    /// `folded_term` must already be lowercased.
    fn contains_folded(text: &str, folded_term: &str) -> bool {
        text.to_lowercase().contains(folded_term)
    }
}

#[async_trait]
impl TriviaStore for TursoStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let mut rows = self.db.db_list_categories().await?;
        let mut categories = Vec::new();
        while let Some(row) = rows.next().await.context("Failed to read category row")? {
            categories.push(Self::row_to_category(&row)?);
        }
        Ok(categories)
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>> {
        match self.db.db_get_category(id).await? {
            Some(row) => Ok(Some(Self::row_to_category(&row)?)),
            None => Ok(None),
        }
    }

    async fn create_category(&self, kind: &str) -> Result<Category> {
        let id = self
            .db
            .db_create_category(kind)
            .await
            .with_context(|| format!("Failed to create category '{}'", kind))?;
        Ok(Category::new(id, kind))
    }

    async fn delete_category(&self, id: i64) -> Result<DeleteResult> {
        let rows = self.db.db_delete_category(id).await?;
        Ok(DeleteResult::from_rows_affected(rows))
    }

    async fn list_questions(&self) -> Result<Vec<Question>> {
        let rows = self.db.db_list_questions().await?;
        Self::collect_questions(rows).await
    }

    async fn get_question(&self, id: i64) -> Result<Option<Question>> {
        match self.db.db_get_question(id).await? {
            Some(row) => Ok(Some(Self::row_to_question(&row)?)),
            None => Ok(None),
        }
    }

    async fn questions_in_category(&self, category_id: i64) -> Result<Vec<Question>> {
        let rows = self.db.db_questions_in_category(category_id).await?;
        Self::collect_questions(rows).await
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>> {
        // SQLite LIKE folds ASCII only, so matching happens here
        let folded_term = term.to_lowercase();
        let rows = self.db.db_list_questions().await?;
        let questions = Self::collect_questions(rows).await?;

        Ok(questions
            .into_iter()
            .filter(|q| Self::contains_folded(&q.question, &folded_term))
            .collect())
    }

    async fn create_question(&self, question: NewQuestion) -> Result<Question> {
        let id = self
            .db
            .db_create_question(DbCreateQuestionParams {
                question: &question.question,
                answer: &question.answer,
                category: question.category,
                difficulty: question.difficulty,
            })
            .await
            .context("Failed to create question")?;

        Ok(question.into_question(id))
    }

    async fn delete_question(&self, id: i64) -> Result<DeleteResult> {
        let rows = self.db.db_delete_question(id).await?;
        Ok(DeleteResult::from_rows_affected(rows))
    }
}
