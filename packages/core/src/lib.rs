//! Trivia Core Business Logic Layer
//!
//! This crate provides the data management and quiz logic behind the trivia
//! HTTP API.
//!
//! # Architecture
//!
//! - **libsql**: Embedded SQLite-compatible database holding questions and categories
//! - **Store trait**: Services are written against `TriviaStore`, not SQL
//! - **Pure helpers**: Pagination and quiz selection have no I/O
//!
//! # Modules
//!
//! - [`models`] - Data structures (Question, Category)
//! - [`db`] - Database layer with libsql integration
//! - [`services`] - Pagination, quiz picker and `TriviaService`

pub mod db;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use db::{DatabaseService, TriviaStore, TursoStore};
pub use models::*;
pub use services::*;
