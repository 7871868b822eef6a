//! Trivia HTTP API
//!
//! - [`config`] - Environment-derived server configuration
//! - [`http`] - axum router, endpoints and the JSON error envelope

pub mod config;
pub mod http;
