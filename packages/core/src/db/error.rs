//! Database Error Types
//!
//! Each variant names the step of opening or querying the trivia database
//! that failed, so logs say which table or statement was involved.

use std::path::PathBuf;
use thiserror::Error;

/// Failures of the libsql trivia database
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The database file could not be opened
    #[error("Failed to open trivia database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        source: libsql::Error,
    },

    /// The directory holding the database file could not be created
    #[error("Failed to create database directory for {path}: {source}")]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Not allowed to create the directory holding the database file
    #[error("Permission denied creating database directory for {path}")]
    PermissionDenied { path: PathBuf },

    /// A table, index or pragma of the schema could not be applied
    #[error("Failed to set up {object}: {source}")]
    SchemaFailed {
        object: String,
        source: libsql::Error,
    },

    /// A statement against `categories` or `questions` failed
    #[error("Failed to {operation}: {source}")]
    QueryFailed {
        operation: String,
        source: libsql::Error,
    },

    /// A statement succeeded but returned something it never should
    #[error("Unexpected result while trying to {operation}")]
    UnexpectedResult { operation: String },

    /// Connection or row access error outside a named statement
    #[error(transparent)]
    Libsql(#[from] libsql::Error),
}

impl DatabaseError {
    pub fn open_failed(path: PathBuf, source: libsql::Error) -> Self {
        Self::OpenFailed { path, source }
    }

    /// Directory creation error, reported as `PermissionDenied` when that is the cause
    pub fn directory_creation(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::PermissionDenied {
            Self::PermissionDenied { path }
        } else {
            Self::DirectoryCreationFailed { path, source }
        }
    }

    pub fn schema(object: impl Into<String>, source: libsql::Error) -> Self {
        Self::SchemaFailed {
            object: object.into(),
            source,
        }
    }

    /// `operation` reads as a verb phrase: "list questions", "delete category 3"
    pub fn query(operation: impl Into<String>, source: libsql::Error) -> Self {
        Self::QueryFailed {
            operation: operation.into(),
            source,
        }
    }

    pub fn unexpected(operation: impl Into<String>) -> Self {
        Self::UnexpectedResult {
            operation: operation.into(),
        }
    }
}
