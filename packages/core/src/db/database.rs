//! Database Connection Management
//!
//! This module provides the database connection and schema initialization
//! for the trivia store using libsql (embedded SQLite).
//!
//! # Architecture
//!
//! - **Path-agnostic**: Accepts any valid PathBuf
//! - **WAL mode**: Write-Ahead Logging for concurrent readers
//! - **Foreign keys**: `questions.category` references `categories.id`
//! - **AUTOINCREMENT ids**: Deleted ids are never handed out again
//!
//! # Database Connection Patterns
//!
//! **ALWAYS use `connect_with_timeout()` in async functions.** It sets the
//! per-connection pragmas (busy timeout, foreign keys) that the schema relies on.
//!
//! ```no_run
//! # use trivia_core::db::DatabaseService;
//! # use std::path::PathBuf;
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let db_service = DatabaseService::new(PathBuf::from("./data/trivia.db")).await?;
//! let conn = db_service.connect_with_timeout().await?;
//! # Ok(())
//! # }
//! ```

use crate::db::error::DatabaseError;
use libsql::{Builder, Database};
use std::path::PathBuf;
use std::sync::Arc;

/// Categories inserted by `seed_default_categories` on an empty store
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

const QUESTION_COLUMNS: &str = "id, question, answer, category, difficulty";

/// Database service for managing the libsql connection and schema
#[derive(Debug, Clone)]
pub struct DatabaseService {
    /// libsql database handle (wrapped in Arc for sharing)
    pub db: Arc<Database>,

    /// Path to the database file
    pub db_path: PathBuf,
}

/// Parameters for question insertion
pub struct DbCreateQuestionParams<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i64,
    pub difficulty: i64,
}

impl DatabaseService {
    /// Open (or create) the trivia database at `db_path`
    ///
    /// Creates missing parent directories, then applies the schema with
    /// `CREATE ... IF NOT EXISTS`, so reopening an existing file keeps its rows.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created, the file
    /// cannot be opened, or a schema statement fails.
    pub async fn new(db_path: PathBuf) -> Result<Self, DatabaseError> {
        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| DatabaseError::directory_creation(db_path.clone(), e))?;
            }
        }

        let db = Builder::new_local(&db_path)
            .build()
            .await
            .map_err(|e| DatabaseError::open_failed(db_path.clone(), e))?;

        let service = Self {
            db: Arc::new(db),
            db_path,
        };

        service.initialize_schema().await?;

        tracing::debug!("Database ready at {}", service.db_path.display());

        Ok(service)
    }

    /// Execute a PRAGMA statement
    ///
    /// PRAGMA statements return rows, so they go through query() rather than execute().
    async fn execute_pragma(
        &self,
        conn: &libsql::Connection,
        pragma: &str,
    ) -> Result<(), DatabaseError> {
        let mut stmt = conn
            .prepare(pragma)
            .await
            .map_err(|e| DatabaseError::schema(pragma, e))?;
        let mut rows = stmt
            .query(())
            .await
            .map_err(|e| DatabaseError::schema(pragma, e))?;
        // Step once so setter pragmas that return no rows still take effect
        rows.next()
            .await
            .map_err(|e| DatabaseError::schema(pragma, e))?;
        Ok(())
    }

    /// Create tables and indexes. Safe to call on an existing database.
    async fn initialize_schema(&self) -> Result<(), DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        self.execute_pragma(&conn, "PRAGMA journal_mode = WAL")
            .await?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| DatabaseError::schema("categories table", e))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question TEXT NOT NULL,
                answer TEXT NOT NULL,
                category INTEGER NOT NULL,
                difficulty INTEGER NOT NULL,
                -- Removing a category removes its questions
                FOREIGN KEY (category) REFERENCES categories(id) ON DELETE CASCADE
            )",
            (),
        )
        .await
        .map_err(|e| DatabaseError::schema("questions table", e))?;

        for (name, sql) in [
            (
                "idx_questions_category",
                "CREATE INDEX IF NOT EXISTS idx_questions_category ON questions(category)",
            ),
            (
                "idx_questions_difficulty",
                "CREATE INDEX IF NOT EXISTS idx_questions_difficulty ON questions(difficulty, id)",
            ),
        ] {
            conn.execute(sql, ())
                .await
                .map_err(|e| DatabaseError::schema(format!("index {}", name), e))?;
        }

        Ok(())
    }

    /// Get a synchronous connection to the database
    ///
    /// **⚠️ WARNING**: Connections from here have no busy timeout and foreign
    /// keys disabled. Use `connect_with_timeout()` from async code.
    pub fn connect(&self) -> Result<libsql::Connection, DatabaseError> {
        Ok(self.db.connect()?)
    }

    /// Get a connection with busy timeout and foreign keys configured
    pub async fn connect_with_timeout(&self) -> Result<libsql::Connection, DatabaseError> {
        let conn = self.connect()?;

        self.execute_pragma(&conn, "PRAGMA busy_timeout = 5000")
            .await?;
        self.execute_pragma(&conn, "PRAGMA foreign_keys = ON")
            .await?;

        Ok(conn)
    }

    /// Insert the standard categories when the categories table is empty
    ///
    /// Returns the number of categories inserted (0 if the table already had rows).
    pub async fn seed_default_categories(&self) -> Result<usize, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        let mut rows = conn
            .query("SELECT COUNT(*) FROM categories", ())
            .await
            .map_err(|e| DatabaseError::query("count categories", e))?;
        let existing: i64 = match rows
            .next()
            .await
            .map_err(|e| DatabaseError::query("count categories", e))?
        {
            Some(row) => row.get(0)?,
            None => return Err(DatabaseError::unexpected("count categories")),
        };

        if existing > 0 {
            return Ok(0);
        }

        for kind in DEFAULT_CATEGORIES {
            conn.execute("INSERT INTO categories (type) VALUES (?)", [kind])
                .await
                .map_err(|e| DatabaseError::query(format!("seed category '{}'", kind), e))?;
        }

        tracing::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());

        Ok(DEFAULT_CATEGORIES.len())
    }

    //
    // CATEGORY OPERATIONS
    //

    /// All categories ordered by id
    pub async fn db_list_categories(&self) -> Result<libsql::Rows, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.query("SELECT id, type FROM categories ORDER BY id", ())
            .await
            .map_err(|e| DatabaseError::query("list categories", e))
    }

    /// Retrieve a single category row by id
    pub async fn db_get_category(&self, id: i64) -> Result<Option<libsql::Row>, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        let mut rows = conn
            .query("SELECT id, type FROM categories WHERE id = ?", [id])
            .await
            .map_err(|e| DatabaseError::query(format!("get category {}", id), e))?;

        rows.next()
            .await
            .map_err(|e| DatabaseError::query(format!("read category {}", id), e))
    }

    /// Insert a category and return its new id
    pub async fn db_create_category(&self, kind: &str) -> Result<i64, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.execute("INSERT INTO categories (type) VALUES (?)", [kind])
            .await
            .map_err(|e| DatabaseError::query(format!("insert category '{}'", kind), e))?;

        Ok(conn.last_insert_rowid())
    }

    /// Delete a category (its questions cascade). Returns rows affected.
    pub async fn db_delete_category(&self, id: i64) -> Result<u64, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.execute("DELETE FROM categories WHERE id = ?", [id])
            .await
            .map_err(|e| DatabaseError::query(format!("delete category {}", id), e))
    }

    //
    // QUESTION OPERATIONS
    //

    /// All questions ordered by difficulty, ties broken by id
    pub async fn db_list_questions(&self) -> Result<libsql::Rows, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.query(
            &format!(
                "SELECT {} FROM questions ORDER BY difficulty, id",
                QUESTION_COLUMNS
            ),
            (),
        )
        .await
        .map_err(|e| DatabaseError::query("list questions", e))
    }

    /// Questions of one category, same ordering as `db_list_questions`
    pub async fn db_questions_in_category(
        &self,
        category: i64,
    ) -> Result<libsql::Rows, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.query(
            &format!(
                "SELECT {} FROM questions WHERE category = ? ORDER BY difficulty, id",
                QUESTION_COLUMNS
            ),
            [category],
        )
        .await
        .map_err(|e| DatabaseError::query(format!("list questions in category {}", category), e))
    }

    /// Retrieve a single question row by id
    pub async fn db_get_question(&self, id: i64) -> Result<Option<libsql::Row>, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        let mut rows = conn
            .query(
                &format!("SELECT {} FROM questions WHERE id = ?", QUESTION_COLUMNS),
                [id],
            )
            .await
            .map_err(|e| DatabaseError::query(format!("get question {}", id), e))?;

        rows.next()
            .await
            .map_err(|e| DatabaseError::query(format!("read question {}", id), e))
    }

    /// Insert a question and return its new id
    ///
    /// Fails with a constraint error when `category` names no category.
    pub async fn db_create_question(
        &self,
        params: DbCreateQuestionParams<'_>,
    ) -> Result<i64, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.execute(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
            (
                params.question,
                params.answer,
                params.category,
                params.difficulty,
            ),
        )
        .await
        .map_err(|e| {
            DatabaseError::query(format!("insert question in category {}", params.category), e)
        })?;

        Ok(conn.last_insert_rowid())
    }

    /// Delete a question by id. Returns rows affected (0 = no such question).
    pub async fn db_delete_question(&self, id: i64) -> Result<u64, DatabaseError> {
        let conn = self.connect_with_timeout().await?;

        conn.execute("DELETE FROM questions WHERE id = ?", [id])
            .await
            .map_err(|e| DatabaseError::query(format!("delete question {}", id), e))
    }
}
