//! Database Layer
//!
//! This module handles all database interactions using libsql:
//!
//! - Database initialization and connection management (`DatabaseService`)
//! - The `TriviaStore` abstraction the service layer is written against
//! - `TursoStore`, the libsql-backed `TriviaStore`

mod database;
mod error;
mod trivia_store;
mod turso_store;

pub use database::{DatabaseService, DbCreateQuestionParams, DEFAULT_CATEGORIES};
pub use error::DatabaseError;
pub use trivia_store::TriviaStore;
pub use turso_store::TursoStore;
